use crate::errors::RenderError;
use std::net::Ipv4Addr;

/// The longest valid ipv4 prefix length.
pub const MAX_PREFIX_LENGTH: i32 = 32;

fn mask_bits(prefix: i32) -> Result<u32, RenderError> {
    if !(0..=MAX_PREFIX_LENGTH).contains(&prefix) {
        return Err(RenderError::InvalidPrefix(prefix));
    }

    // shifting a u32 by 32 overflows, so a zero length prefix is handled on its own
    if prefix == 0 {
        return Ok(0);
    }

    Ok(u32::MAX << (MAX_PREFIX_LENGTH - prefix))
}

/// Returns the dotted quad subnet mask for `prefix`, ex: 24 -> "255.255.255.0".
///
/// # Errors
///
/// Returns `RenderError::InvalidPrefix` if `prefix` is outside of 0 through 32.
pub fn prefix_to_mask(prefix: i32) -> Result<String, RenderError> {
    Ok(Ipv4Addr::from(mask_bits(prefix)?).to_string())
}

/// Returns the dotted quad wildcard (inverse) mask for `prefix`, ex: 24 -> "0.0.0.255". The
/// wildcard is always the bitwise complement of the mask `prefix_to_mask` returns.
///
/// # Errors
///
/// Returns `RenderError::InvalidPrefix` if `prefix` is outside of 0 through 32.
pub fn prefix_to_wildcard(prefix: i32) -> Result<String, RenderError> {
    Ok(Ipv4Addr::from(!mask_bits(prefix)?).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_bits(dotted: &str) -> u32 {
        u32::from(dotted.parse::<Ipv4Addr>().expect("mask is not a valid dotted quad"))
    }

    #[test]
    fn mask_and_wildcard_for_common_prefixes() {
        assert_eq!(prefix_to_mask(24).unwrap(), "255.255.255.0");
        assert_eq!(prefix_to_wildcard(24).unwrap(), "0.0.0.255");
        assert_eq!(prefix_to_mask(30).unwrap(), "255.255.255.252");
        assert_eq!(prefix_to_wildcard(30).unwrap(), "0.0.0.3");
        assert_eq!(prefix_to_mask(17).unwrap(), "255.255.128.0");
        assert_eq!(prefix_to_wildcard(9).unwrap(), "0.127.255.255");
    }

    #[test]
    fn boundary_prefixes() {
        assert_eq!(prefix_to_mask(0).unwrap(), "0.0.0.0");
        assert_eq!(prefix_to_wildcard(0).unwrap(), "255.255.255.255");
        assert_eq!(prefix_to_mask(32).unwrap(), "255.255.255.255");
        assert_eq!(prefix_to_wildcard(32).unwrap(), "0.0.0.0");
    }

    #[test]
    fn wildcard_is_complement_of_mask() {
        for prefix in 0..=MAX_PREFIX_LENGTH {
            let mask = to_bits(&prefix_to_mask(prefix).unwrap());
            let wildcard = to_bits(&prefix_to_wildcard(prefix).unwrap());

            assert_eq!(mask, !wildcard, "prefix {prefix}");
            assert_eq!(mask.leading_ones(), prefix as u32, "prefix {prefix}");
        }
    }

    #[test]
    fn out_of_range_prefixes_fail() {
        assert_eq!(prefix_to_mask(-1), Err(RenderError::InvalidPrefix(-1)));
        assert_eq!(prefix_to_mask(33), Err(RenderError::InvalidPrefix(33)));
        assert_eq!(prefix_to_wildcard(-1), Err(RenderError::InvalidPrefix(-1)));
        assert_eq!(prefix_to_wildcard(33), Err(RenderError::InvalidPrefix(33)));
    }
}
