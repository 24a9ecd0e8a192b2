use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Formats a server timestamp for display.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| ts.to_offset(time::UtcOffset::UTC).format(&format).ok())
        .unwrap_or_else(|| raw.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_rfc3339() {
        assert_eq!(
            format_timestamp("2026-10-18T09:05:03.123456Z"),
            "2026-10-18 09:05:03 UTC"
        );
        assert_eq!(
            format_timestamp("2026-10-18T11:05:03+02:00"),
            "2026-10-18 09:05:03 UTC"
        );
    }

    #[test]
    fn keep_unparseable_input() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
