use crate::codec::credential::EncryptionType;
use crate::device::presence::Presence;
use crate::errors::{
    ConfigError,
    RenderError,
};
use crate::render::document::render_config;
use crate::util::patterns::{
    method_list_pattern,
    port_index_pattern,
};
use core::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::net::Ipv4Addr;

/// The lowest privilege level a local user can be granted.
pub const MIN_PRIVILEGE_LEVEL: u8 = 1;

/// The highest privilege level a local user can be granted.
pub const MAX_PRIVILEGE_LEVEL: u8 = 15;

// all of the "closed set" string enums print exactly the word the device expects
macro_rules! impl_display_as_str {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Display for $t {
                fn fmt(
                    &self,
                    f: &mut Formatter<'_>,
                ) -> FmtResult {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

/// `DeviceConfig` is the root of the structured router configuration. It is a plain, fully owned
/// tree -- rendering never mutates it and every default is applied at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// The ios version tag, "16.6.4" if unset.
    #[serde(default)]
    pub version: Option<String>,
    /// The global `service` directives.
    #[serde(default)]
    pub services: ServicesConfig,
    /// Hostname of the router, ex: "R1".
    #[serde(default)]
    pub hostname: Option<String>,
    /// Hashed/obscured secret for entering privileged exec mode.
    #[serde(default)]
    pub enable_secret: Option<EnableSecret>,
    /// Plaintext password for entering privileged exec mode.
    #[serde(default)]
    pub enable_password: Option<String>,
    /// AAA authentication method lists -- having this set at all emits `aaa new-model`.
    #[serde(default)]
    pub aaa_new_model: Option<AaaConfig>,
    /// Local users, rendered in the given order.
    #[serde(default)]
    pub users: Vec<User>,
    /// Cisco express forwarding for ipv4, off if unset.
    #[serde(default)]
    pub ip_cef: Option<bool>,
    /// Cisco express forwarding for ipv6, off if unset.
    #[serde(default)]
    pub ipv6_cef: Option<bool>,
    /// DNS lookup toggle. Carried for completeness, it does not change the rendered layout.
    #[serde(default)]
    pub ip_domain_lookup: Option<bool>,
    /// Default domain name.
    #[serde(default)]
    pub ip_domain_name: Option<String>,
    /// Message of the day banner text.
    #[serde(default)]
    pub banner_motd: Option<String>,
    /// Spanning tree mode, pvst if unset.
    #[serde(default)]
    pub spanning_tree_mode: Option<SpanningTreeMode>,
    /// Interfaces, rendered in the given order.
    #[serde(default)]
    pub interfaces: Vec<Interface>,
    /// OSPF routing process.
    #[serde(default)]
    pub router_ospf: Option<OspfConfig>,
    /// Classless routing, on if unset.
    #[serde(default)]
    pub ip_classless: Option<bool>,
    /// Static routes, rendered in the given order.
    #[serde(default)]
    pub ip_route: Option<Vec<StaticRoute>>,
    /// Netflow export; absent and present-without-version both export version 9.
    #[serde(default, with = "flow_export_presence")]
    pub ip_flow_export: Presence<u16>,
    /// Console line.
    #[serde(default)]
    pub line_con: Option<LineConfig>,
    /// Auxiliary line.
    #[serde(default)]
    pub line_aux: Option<LineConfig>,
    /// Virtual terminal lines.
    #[serde(default)]
    pub line_vty: Option<LineConfig>,
}

impl DeviceConfig {
    /// Render this config into ios configuration text, see `render::document::render_config`.
    ///
    /// # Errors
    ///
    /// Returns a `RenderError` if any prefix length or credential can not be rendered.
    pub fn render(&self) -> Result<String, RenderError> {
        render_config(self)
    }

    /// Checks the things the type system can not: privilege ranges, interface index shapes,
    /// non-empty authentication source lists and aaa/line method list names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for user in &self.users {
            if let Some(privilege) = user.privilege {
                if !(MIN_PRIVILEGE_LEVEL..=MAX_PRIVILEGE_LEVEL).contains(&privilege) {
                    return Err(invalid(format!(
                        "user '{}' has privilege {privilege}, must be between {MIN_PRIVILEGE_LEVEL} and {MAX_PRIVILEGE_LEVEL}",
                        user.username
                    )));
                }
            }
        }

        let passive_interfaces = self
            .router_ospf
            .as_ref()
            .and_then(|ospf| ospf.passive_interfaces.as_deref())
            .unwrap_or_default();

        for port in self
            .interfaces
            .iter()
            .map(|interface| &interface.port)
            .chain(passive_interfaces)
        {
            if !port_index_pattern().is_match(&port.index) {
                return Err(invalid(format!(
                    "interface index '{}' of '{port}' is not slash delimited numbers",
                    port.index
                )));
            }
        }

        if let Some(aaa) = &self.aaa_new_model {
            for (name, method) in aaa.methods() {
                if method.source.is_empty() {
                    return Err(invalid(format!(
                        "aaa authentication {name} has no authentication sources"
                    )));
                }

                if !method_list_pattern().is_match(&method.method_list) {
                    return Err(invalid(format!(
                        "aaa authentication {name} method list '{}' is not a valid name",
                        method.method_list
                    )));
                }
            }
        }

        for (class, line) in self.lines() {
            let method_list = line
                .login
                .as_ref()
                .and_then(|login| login.method_list.as_deref());

            if let Some(method_list) = method_list {
                if !method_list_pattern().is_match(method_list) {
                    return Err(invalid(format!(
                        "line {class} login method list '{method_list}' is not a valid name"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns the configured lines paired with their class, in render order.
    pub fn lines(&self) -> impl Iterator<Item = (LineClass, &LineConfig)> {
        [
            (LineClass::Console, self.line_con.as_ref()),
            (LineClass::Auxiliary, self.line_aux.as_ref()),
            (LineClass::VirtualTerminal, self.line_vty.as_ref()),
        ]
        .into_iter()
        .filter_map(|(class, line)| line.map(|l| (class, l)))
    }
}

fn invalid(details: String) -> ConfigError {
    ConfigError::Invalid { details }
}

/// Global `service` directives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicesConfig {
    /// Timestamps on debug messages; enabled by presence, the mode defaults to "datetime msec".
    #[serde(default, with = "timestamps_presence")]
    pub timestamps_debug: Presence<TimestampMode>,
    /// Timestamps on log messages; enabled by presence, the mode defaults to "datetime msec".
    #[serde(default, with = "timestamps_presence")]
    pub timestamps_log: Presence<TimestampMode>,
    /// Automatic password encryption, off if unset.
    #[serde(default)]
    pub password_encryption: Option<bool>,
}

/// What is appended to debug/log messages as a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampMode {
    /// Router uptime.
    #[serde(rename = "uptime")]
    Uptime,
    /// Local date and time.
    #[serde(rename = "datetime")]
    Datetime,
    /// Local date and time with millisecond precision.
    #[serde(rename = "datetime msec")]
    DatetimeMsec,
}

impl TimestampMode {
    /// The mode as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uptime => "uptime",
            Self::Datetime => "datetime",
            Self::DatetimeMsec => "datetime msec",
        }
    }
}

/// The enable secret; only type 5 and 7 are meaningful for a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnableSecret {
    /// How the secret is encoded.
    #[serde(alias = "ecryption_type")]
    pub encryption_type: EncryptionType,
    /// The secret in plaintext.
    pub plaintext: String,
}

/// The `aaa new-model` block. Being present at all turns aaa on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AaaConfig {
    /// Authentication method lists.
    #[serde(default)]
    pub authentication: AuthenticationConfig,
}

impl AaaConfig {
    /// Returns the configured authentication methods paired with the keyword the device uses for
    /// them, in render order.
    pub fn methods(&self) -> impl Iterator<Item = (&'static str, &AuthenticationMethod)> {
        let authentication = &self.authentication;

        [
            ("login", authentication.login.as_ref()),
            ("enable", authentication.enable.as_ref()),
            ("ppp", authentication.ppp.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, method)| method.map(|m| (name, m)))
    }
}

/// AAA authentication method lists, keyed by what they authenticate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthenticationConfig {
    /// Login (line access) authentication.
    #[serde(default)]
    pub login: Option<AuthenticationMethod>,
    /// Privileged exec (enable) authentication.
    #[serde(default)]
    pub enable: Option<AuthenticationMethod>,
    /// Point-to-point protocol authentication.
    #[serde(default)]
    pub ppp: Option<AuthenticationMethod>,
}

/// A named method list and the ordered sources it tries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthenticationMethod {
    /// "default" or a user defined list name such as "MGT".
    pub method_list: String,
    /// Sources tried in order until one answers.
    pub source: Vec<AuthenticationSource>,
}

/// Where a credential is checked during authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticationSource {
    /// The local user database.
    #[serde(rename = "local")]
    Local,
    /// The enable password.
    #[serde(rename = "enable")]
    Enable,
    /// Configured radius servers.
    #[serde(rename = "group radius")]
    GroupRadius,
    /// Configured tacacs+ servers.
    #[serde(rename = "group tacacs+")]
    GroupTacacs,
    /// Configured ldap servers.
    #[serde(rename = "group ldap")]
    GroupLdap,
    /// Configured kerberos servers.
    #[serde(rename = "group kerberos")]
    GroupKerberos,
    /// The line password.
    #[serde(rename = "line")]
    Line,
}

impl AuthenticationSource {
    /// The source as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Enable => "enable",
            Self::GroupRadius => "group radius",
            Self::GroupTacacs => "group tacacs+",
            Self::GroupLdap => "group ldap",
            Self::GroupKerberos => "group kerberos",
            Self::Line => "line",
        }
    }
}

/// The usernames local users may be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Username {
    /// "cisco"
    Cisco,
    /// "class"
    Class,
}

impl Username {
    /// The username as rendered.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cisco => "cisco",
            Self::Class => "class",
        }
    }
}

/// A local user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// The username.
    pub username: Username,
    /// Privilege level, 15 if unset.
    #[serde(default)]
    pub privilege: Option<u8>,
    /// The users password.
    pub password: UserPassword,
}

/// A local users password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPassword {
    /// How the password is encoded, plaintext if unset.
    #[serde(default, alias = "ecryption_type")]
    pub encryption_type: Option<EncryptionType>,
    /// The password in plaintext.
    pub plaintext: String,
}

/// Spanning tree protocol mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanningTreeMode {
    /// Per vlan spanning tree.
    Pvst,
    /// Rapid per vlan spanning tree.
    RapidPvst,
    /// Multiple spanning tree.
    Mst,
}

impl SpanningTreeMode {
    /// The mode as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pvst => "pvst",
            Self::RapidPvst => "rapid-pvst",
            Self::Mst => "mst",
        }
    }
}

/// Interface families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterfaceType {
    /// Loopback interface.
    Loopback,
    /// Gigabit ethernet port.
    GigabitEthernet,
    /// Fast ethernet port.
    FastEthernet,
    /// Serial port.
    Serial,
    /// Switched virtual interface.
    Vlan,
}

impl InterfaceType {
    /// The family name as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loopback => "Loopback",
            Self::GigabitEthernet => "GigabitEthernet",
            Self::FastEthernet => "FastEthernet",
            Self::Serial => "Serial",
            Self::Vlan => "Vlan",
        }
    }
}

/// `PortId` names an interface, ex: `FastEthernet` + "0/0" is "FastEthernet0/0".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortId {
    /// The interface family.
    #[serde(rename = "type")]
    pub kind: InterfaceType,
    /// Slash delimited slot/port numbers, ex: "0/1/0".
    pub index: String,
}

impl PortId {
    /// Returns a new `PortId`.
    #[must_use]
    pub fn new(
        kind: InterfaceType,
        index: &str,
    ) -> Self {
        Self {
            kind,
            index: index.to_owned(),
        }
    }
}

impl Display for PortId {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> FmtResult {
        write!(f, "{}{}", self.kind, self.index)
    }
}

/// An ipv4 address and the prefix length of its subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ipv4Interface {
    /// The address.
    pub ip: Ipv4Addr,
    /// The subnet prefix length.
    #[serde(alias = "subnetPrefix")]
    pub subnet_prefix: i32,
}

/// Interface duplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duplex {
    /// Negotiated.
    Auto,
    /// Full duplex.
    Full,
    /// Half duplex.
    Half,
}

impl Duplex {
    /// The duplex as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Full => "full",
            Self::Half => "half",
        }
    }
}

/// Interface speed in mbit/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speed {
    /// Negotiated.
    #[serde(rename = "auto")]
    Auto,
    /// 10 mbit/s.
    #[serde(rename = "10")]
    Ten,
    /// 100 mbit/s.
    #[serde(rename = "100")]
    Hundred,
    /// 1000 mbit/s.
    #[serde(rename = "1000")]
    Thousand,
}

impl Speed {
    /// The speed as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Ten => "10",
            Self::Hundred => "100",
            Self::Thousand => "1000",
        }
    }
}

/// A single interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interface {
    /// Which interface this is.
    pub port: PortId,
    /// Free text description.
    #[serde(default)]
    pub description: Option<String>,
    /// The ipv4 address, `no ip address` if unset.
    #[serde(default)]
    pub ip4_address: Option<Ipv4Interface>,
    /// Clock rate for serial dce ends.
    #[serde(default)]
    pub clock_rate: Option<u32>,
    /// Duplex, auto if unset.
    #[serde(default)]
    pub duplex: Option<Duplex>,
    /// Speed, auto if unset.
    #[serde(default)]
    pub speed: Option<Speed>,
    /// Maximum transmission unit.
    #[serde(default)]
    pub mtu: Option<u16>,
    /// Administratively disables the interface when true.
    #[serde(default)]
    pub shutdown: Option<bool>,
}

impl Interface {
    /// Returns an `Interface` with nothing but its port set.
    #[must_use]
    pub const fn new(port: PortId) -> Self {
        Self {
            port,
            description: None,
            ip4_address: None,
            clock_rate: None,
            duplex: None,
            speed: None,
            mtu: None,
            shutdown: None,
        }
    }
}

/// An OSPF routing process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OspfConfig {
    /// The process id.
    pub process_id: u16,
    /// Log neighbor adjacency changes, on if unset.
    #[serde(default)]
    pub log_adjacency_changes: Option<bool>,
    /// Interfaces that are advertised but send no hellos.
    #[serde(default)]
    pub passive_interfaces: Option<Vec<PortId>>,
    /// Networks OSPF runs on.
    #[serde(default)]
    pub networks: Vec<OspfNetwork>,
}

/// An OSPF network statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OspfNetwork {
    /// Network address.
    pub ip_address: Ipv4Addr,
    /// Subnet prefix length, rendered as a wildcard mask.
    #[serde(alias = "subnetPrefix")]
    pub subnet_prefix: i32,
    /// Area id.
    pub area: u32,
}

/// A static route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticRoute {
    /// Destination network address.
    pub destination: Ipv4Addr,
    /// Destination prefix length, rendered as a subnet mask.
    #[serde(alias = "subnetPrefix")]
    pub subnet_prefix: i32,
    /// Next hop address.
    pub forwarding_router: Ipv4Addr,
}

/// The three line classes a router has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// The console port.
    Console,
    /// The auxiliary port.
    Auxiliary,
    /// Virtual terminal (telnet/ssh) lines.
    VirtualTerminal,
}

impl LineClass {
    /// The line keyword as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "con",
            Self::Auxiliary => "aux",
            Self::VirtualTerminal => "vty",
        }
    }
}

/// Where logging messages go on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineLogging {
    /// Immediately, re-printing the interrupted input.
    Synchronous,
    /// To the terminal monitor.
    Monitor,
}

impl LineLogging {
    /// The mode as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Synchronous => "synchronous",
            Self::Monitor => "monitor",
        }
    }
}

/// A line password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinePassword {
    /// The password in plaintext.
    pub plaintext: String,
    /// How the password is encoded, plaintext if unset.
    #[serde(default, alias = "ecryption_type")]
    pub encryption_type: Option<EncryptionType>,
}

/// How login on a line is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    /// Local user database.
    Local,
    /// AAA method list.
    Authentication,
}

impl LoginMethod {
    /// The method as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Authentication => "authentication",
        }
    }
}

/// Login policy for a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginPolicy {
    /// Local or aaa login.
    pub method: LoginMethod,
    /// The aaa method list, only meaningful with `LoginMethod::Authentication`.
    #[serde(default)]
    pub method_list: Option<String>,
}

/// Idle time before an exec session is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecTimeout {
    /// Minutes, left empty in the output if unset.
    #[serde(default)]
    pub minutes: Option<u32>,
    /// Seconds.
    pub seconds: u32,
}

/// Protocols accepted on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportInput {
    /// Every protocol.
    All,
    /// No protocol.
    None,
    /// Secure shell.
    Ssh,
    /// Telnet.
    Telnet,
    /// Raw tcp.
    Raw,
    /// Local area transport.
    Lat,
}

impl TransportInput {
    /// The protocol as the device spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::None => "none",
            Self::Ssh => "ssh",
            Self::Telnet => "telnet",
            Self::Raw => "raw",
            Self::Lat => "lat",
        }
    }
}

/// `LineConfig` is the shape shared by console, auxiliary and vty lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineConfig {
    /// First line number, 0 if unset.
    #[serde(default)]
    pub port_start: Option<u16>,
    /// Last line number; the default depends on the line class.
    #[serde(default)]
    pub port_end: Option<u16>,
    /// Logging mode.
    #[serde(default)]
    pub logging: Option<LineLogging>,
    /// Line password.
    #[serde(default)]
    pub password: Option<LinePassword>,
    /// Login policy, `no login` if unset.
    #[serde(default)]
    pub login: Option<LoginPolicy>,
    /// Exec timeout.
    pub exec_timeout: ExecTimeout,
    /// Accepted protocols.
    #[serde(default)]
    pub transport_input: Option<TransportInput>,
}

impl LineConfig {
    /// Returns a `LineConfig` with only the (required) exec timeout set.
    #[must_use]
    pub const fn new(exec_timeout: ExecTimeout) -> Self {
        Self {
            port_start: None,
            port_end: None,
            logging: None,
            password: None,
            login: None,
            exec_timeout,
            transport_input: None,
        }
    }
}

impl_display_as_str!(
    TimestampMode,
    AuthenticationSource,
    Username,
    SpanningTreeMode,
    InterfaceType,
    Duplex,
    Speed,
    LineClass,
    LineLogging,
    LoginMethod,
    TransportInput,
);

/// (De)serializes a timestamps block (`{ mode: ... }`) as a `Presence` of its mode.
mod timestamps_presence {
    use super::{
        Presence,
        TimestampMode,
    };
    use serde::{
        Deserialize,
        Deserializer,
        Serialize,
        Serializer,
    };

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct TimestampsBlock {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<TimestampMode>,
    }

    pub fn serialize<S: Serializer>(
        p: &Presence<TimestampMode>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        p.is_present()
            .then(|| TimestampsBlock {
                mode: p.value().copied(),
            })
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D
    ) -> Result<Presence<TimestampMode>, D::Error> {
        Ok(Option::<TimestampsBlock>::deserialize(d)?
            .map_or(Presence::Absent, |block| {
                Presence::from_parts(true, block.mode)
            }))
    }
}

/// (De)serializes a flow export block (`{ version: ... }`) as a `Presence` of its version.
mod flow_export_presence {
    use super::Presence;
    use serde::{
        Deserialize,
        Deserializer,
        Serialize,
        Serializer,
    };

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct FlowExportBlock {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        version: Option<u16>,
    }

    pub fn serialize<S: Serializer>(
        p: &Presence<u16>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        p.is_present()
            .then(|| FlowExportBlock {
                version: p.value().copied(),
            })
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Presence<u16>, D::Error> {
        Ok(Option::<FlowExportBlock>::deserialize(d)?
            .map_or(Presence::Absent, |block| {
                Presence::from_parts(true, block.version)
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_presence_from_yaml() {
        let services: ServicesConfig = serde_yaml::from_str(
            "timestamps_log: {}\ntimestamps_debug:\n  mode: uptime\n",
        )
        .unwrap();

        assert_eq!(services.timestamps_log, Presence::Defaulted);
        assert_eq!(
            services.timestamps_debug,
            Presence::Valued(TimestampMode::Uptime)
        );
        assert_eq!(services.password_encryption, None);

        let services: ServicesConfig = serde_yaml::from_str("timestamps_log: null\n").unwrap();

        assert_eq!(services.timestamps_log, Presence::Absent);
        assert_eq!(services.timestamps_debug, Presence::Absent);
    }

    #[test]
    fn flow_export_presence_from_yaml() {
        let config: DeviceConfig = serde_yaml::from_str("ip_flow_export: {}\n").unwrap();
        assert_eq!(config.ip_flow_export, Presence::Defaulted);

        let config: DeviceConfig =
            serde_yaml::from_str("ip_flow_export:\n  version: 5\n").unwrap();
        assert_eq!(config.ip_flow_export, Presence::Valued(5));

        let config: DeviceConfig = serde_yaml::from_str("hostname: R1\n").unwrap();
        assert_eq!(config.ip_flow_export, Presence::Absent);
    }

    #[test]
    fn legacy_key_spellings_are_accepted() {
        let config: DeviceConfig = serde_yaml::from_str(
            r"
enable_secret:
  ecryption_type: 5
  plaintext: cisco
interfaces:
  - port:
      type: GigabitEthernet
      index: 0/1/0
    ip4_address:
      ip: 172.16.0.1
      subnetPrefix: 24
    speed: '1000'
",
        )
        .unwrap();

        let secret = config.enable_secret.unwrap();
        assert_eq!(secret.encryption_type, EncryptionType::Md5);

        let interface = &config.interfaces[0];
        assert_eq!(interface.port.to_string(), "GigabitEthernet0/1/0");
        assert_eq!(interface.ip4_address.unwrap().subnet_prefix, 24);
        assert_eq!(interface.speed, Some(Speed::Thousand));
    }

    #[test]
    fn presence_round_trips_through_yaml() {
        let mut config = DeviceConfig::default();
        config.services.timestamps_log = Presence::Defaulted;
        config.ip_flow_export = Presence::Valued(10);

        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: DeviceConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(back, config);
    }

    #[test]
    fn validate_rejects_out_of_range_privilege() {
        let config: DeviceConfig = serde_yaml::from_str(
            "users:\n  - username: cisco\n    privilege: 16\n    password:\n      plaintext: cisco\n",
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn validate_rejects_privilege_zero() {
        let config: DeviceConfig = serde_yaml::from_str(
            "users:\n  - username: cisco\n    privilege: 0\n    password:\n      plaintext: cisco\n",
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { details }) if details.contains("between 1 and 15")
        ));
    }

    #[test]
    fn validate_checks_line_method_lists() {
        let mut line = LineConfig::new(ExecTimeout {
            minutes: None,
            seconds: 0,
        });
        line.login = Some(LoginPolicy {
            method: LoginMethod::Authentication,
            method_list: Some("not a list".to_owned()),
        });

        let mut config = DeviceConfig {
            line_vty: Some(line),
            ..DeviceConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { details }) if details.starts_with("line vty")
        ));

        if let Some(login) = config.line_vty.as_mut().and_then(|l| l.login.as_mut()) {
            login.method_list = Some("MGT".to_owned());
        }

        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_port_index_and_empty_sources() {
        let mut config = DeviceConfig::default();
        config
            .interfaces
            .push(Interface::new(PortId::new(InterfaceType::Serial, "0-0")));
        assert!(config.validate().is_err());

        let mut config = DeviceConfig::default();
        config.aaa_new_model = Some(AaaConfig {
            authentication: AuthenticationConfig {
                login: Some(AuthenticationMethod {
                    method_list: "default".to_owned(),
                    source: vec![],
                }),
                ..AuthenticationConfig::default()
            },
        });
        assert!(config.validate().is_err());

        let mut config = DeviceConfig::default();
        config
            .interfaces
            .push(Interface::new(PortId::new(InterfaceType::Serial, "0/0/1.100")));
        assert!(config.validate().is_ok());
    }
}
