use crate::device::config::{
    Duplex,
    SpanningTreeMode,
    Speed,
    TimestampMode,
};

/// The separator/placeholder line ios uses between (and in place of empty) sections.
pub const PLACEHOLDER: &str = "!";

/// The last line of every rendered config.
pub const TERMINATOR: &str = "end";

/// The ios version rendered when none is configured.
pub const DEFAULT_VERSION: &str = "16.6.4";

/// Timestamp mode used when a timestamps directive is absent or has no mode.
pub const DEFAULT_TIMESTAMP_MODE: TimestampMode = TimestampMode::DatetimeMsec;

/// Default `service password-encryption` setting (off).
pub const DEFAULT_PASSWORD_ENCRYPTION: bool = false;

/// Default `ip cef` setting (off).
pub const DEFAULT_IP_CEF: bool = false;

/// Default `ipv6 cef` setting (off).
pub const DEFAULT_IPV6_CEF: bool = false;

/// Default spanning tree mode.
pub const DEFAULT_SPANNING_TREE_MODE: SpanningTreeMode = SpanningTreeMode::Pvst;

/// Default interface duplex.
pub const DEFAULT_DUPLEX: Duplex = Duplex::Auto;

/// Default interface speed.
pub const DEFAULT_SPEED: Speed = Speed::Auto;

/// Default local user privilege level.
pub const DEFAULT_PRIVILEGE: u8 = 15;

/// Default OSPF `log-adjacency-changes` setting (on).
pub const DEFAULT_LOG_ADJACENCY_CHANGES: bool = true;

/// Default `ip classless` setting (on).
pub const DEFAULT_IP_CLASSLESS: bool = true;

/// Netflow export version rendered when none is configured.
pub const DEFAULT_FLOW_EXPORT_VERSION: u16 = 9;

/// First line number of every line class when none is configured.
pub const DEFAULT_LINE_PORT_START: u16 = 0;

/// Last vty line number when none is configured; console and aux have no default end.
pub const DEFAULT_VTY_PORT_END: u16 = 4;
