//! ID prefixes for persisted records.
//!
//! IDs look like `dgn-a3f8b2c1`: a three-letter prefix and eight hex chars
//! drawn by the store at insert time.

pub const PREFIX_DIAGNOSIS: &str = "dgn";
pub const PREFIX_TECHNICIAN: &str = "tec";

/// Return the prefix portion of an ID, if it has one.
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    id.split_once('-').map(|(prefix, _)| prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_of_splits_on_first_dash() {
        assert_eq!(prefix_of("dgn-a3f8b2c1"), Some("dgn"));
        assert_eq!(prefix_of("1717171717"), None);
    }
}
