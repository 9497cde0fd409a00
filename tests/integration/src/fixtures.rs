//! Golden values shared by the integration tests

use humanize_core::HumanValue;

/// A value and its expected default rendering
pub struct Golden {
    pub value: HumanValue,
    pub expected: &'static str,
}

fn golden(value: HumanValue, expected: &'static str) -> Golden {
    Golden { value, expected }
}

/// Renderings that must stay stable across releases
pub fn golden_values() -> Vec<Golden> {
    vec![
        golden(HumanValue::Year(0), "1970"),
        golden(HumanValue::Year(47), "2017"),
        golden(HumanValue::Year(-1975), "-0005"),
        golden(HumanValue::Month(0), "1970-01"),
        golden(HumanValue::Month(-1), "1969-12"),
        golden(HumanValue::Month(575), "2017-12"),
        golden(HumanValue::Day(0), "1970-01-01"),
        golden(HumanValue::Day(-1), "1969-12-31"),
        golden(HumanValue::Day(17_501), "2017-12-01"),
        golden(HumanValue::Hour(0), "1970-01-01-00"),
        golden(HumanValue::Hour(-1), "1969-12-31-23"),
        golden(HumanValue::Hour(420_034), "2017-12-01-10"),
        golden(HumanValue::Time(0), "00:00:00"),
        golden(HumanValue::Time(36_775_038_194), "10:12:55.038194"),
        golden(HumanValue::Time(36_775_038_000), "10:12:55.038"),
        golden(HumanValue::Timestamp(0), "1970-01-01T00:00:00"),
        golden(
            HumanValue::Timestamp(1_512_151_975_038_194),
            "2017-12-01T18:12:55.038194",
        ),
        golden(HumanValue::TimestampTz(0), "1970-01-01T00:00:00Z"),
        golden(
            HumanValue::TimestampTz(1_512_151_975_038_194),
            "2017-12-01T18:12:55.038194Z",
        ),
        golden(
            HumanValue::TimestampTz(-1_512_151_975_038_194),
            "1922-01-31T05:47:04.961806Z",
        ),
        golden(HumanValue::Binary(vec![]), ""),
        golden(HumanValue::Binary(b"\x00\x01\x02\x03".to_vec()), "AAECAw=="),
        golden(HumanValue::Null, "null"),
    ]
}

/// Request line for a value, as the render stream expects it
pub fn request_line(value: &HumanValue) -> String {
    serde_json::to_string(value).expect("HumanValue always serializes")
}
