//! Compass bucketing for wind bearings
//!
//! Reproduces the upstream bucket table as observed, including its quirks:
//! 0 degrees reports "no", the interval (292.5, 295.5] falls between the
//! west and north-west buckets and also reports "no", and anything at or
//! beyond 360 degrees (or negative) is out of range.

/// Map a bearing in degrees clockwise from true north to a compass name
///
/// Returns one of the eight cardinal/intercardinal names, or "no" when the
/// bearing falls outside every bucket.
pub fn wind_direction_name(degrees: f64) -> &'static str {
    if degrees > 0.0 && degrees <= 22.5 {
        "north"
    } else if degrees > 22.5 && degrees <= 67.5 {
        "north-east"
    } else if degrees > 67.5 && degrees <= 112.5 {
        "east"
    } else if degrees > 112.5 && degrees <= 157.5 {
        "south-east"
    } else if degrees > 157.5 && degrees <= 202.5 {
        "south"
    } else if degrees > 202.5 && degrees <= 247.5 {
        "south-west"
    } else if degrees > 247.5 && degrees <= 292.5 {
        "west"
    } else if degrees > 295.5 && degrees <= 337.5 {
        "north-west"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_interiors() {
        assert_eq!(wind_direction_name(10.0), "north");
        assert_eq!(wind_direction_name(45.0), "north-east");
        assert_eq!(wind_direction_name(90.0), "east");
        assert_eq!(wind_direction_name(135.0), "south-east");
        assert_eq!(wind_direction_name(180.0), "south");
        assert_eq!(wind_direction_name(225.0), "south-west");
        assert_eq!(wind_direction_name(270.0), "west");
        assert_eq!(wind_direction_name(315.0), "north-west");
    }

    #[test]
    fn test_upper_boundaries_are_inclusive() {
        assert_eq!(wind_direction_name(22.5), "north");
        assert_eq!(wind_direction_name(67.5), "north-east");
        assert_eq!(wind_direction_name(112.5), "east");
        assert_eq!(wind_direction_name(157.5), "south-east");
        assert_eq!(wind_direction_name(202.5), "south");
        assert_eq!(wind_direction_name(247.5), "south-west");
        assert_eq!(wind_direction_name(292.5), "west");
        assert_eq!(wind_direction_name(337.5), "north-west");
    }

    #[test]
    fn test_lower_boundaries_are_exclusive() {
        assert_eq!(wind_direction_name(22.6), "north-east");
        assert_eq!(wind_direction_name(295.5), "no");
        assert_eq!(wind_direction_name(295.6), "north-west");
    }

    #[test]
    fn test_zero_reports_no_wind() {
        assert_eq!(wind_direction_name(0.0), "no");
    }

    #[test]
    fn test_gap_between_west_and_north_west() {
        // (292.5, 295.5] belongs to no bucket in the upstream table.
        assert_eq!(wind_direction_name(293.0), "no");
        assert_eq!(wind_direction_name(294.0), "no");
        assert_eq!(wind_direction_name(295.5), "no");
    }

    #[test]
    fn test_out_of_range_bearings() {
        assert_eq!(wind_direction_name(360.0), "no");
        assert_eq!(wind_direction_name(400.0), "no");
        assert_eq!(wind_direction_name(-10.0), "no");
    }
}
