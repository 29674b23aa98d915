mod tests {
    use ring_clock::WallTime;

    #[test]
    fn test_from_secs_of_day() {
        assert_eq!(WallTime::from_secs_of_day(0), WallTime::new(0, 0, 0));
        assert_eq!(WallTime::from_secs_of_day(8 * 3600 + 30 * 60 + 15), WallTime::new(8, 30, 15));
        assert_eq!(WallTime::from_secs_of_day(86_399), WallTime::new(23, 59, 59));
        // Larger counts wrap at a day.
        assert_eq!(WallTime::from_secs_of_day(86_400 + 61), WallTime::new(0, 1, 1));
    }

    #[test]
    fn test_night_day_split() {
        assert!(WallTime::new(5, 59, 59).is_night());
        assert!(!WallTime::new(6, 0, 0).is_night());
        assert!(!WallTime::new(17, 59, 59).is_night());
        assert!(WallTime::new(18, 0, 0).is_night());
        assert!(WallTime::new(0, 0, 0).is_night());
        assert!(WallTime::new(23, 0, 0).is_night());
    }
}
