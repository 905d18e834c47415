use crate::device::config::{
    AaaConfig,
    AuthenticationConfig,
    DeviceConfig,
    EnableSecret,
    Interface,
    LineClass,
    LineConfig,
    OspfConfig,
    ServicesConfig,
    SpanningTreeMode,
    StaticRoute,
    User,
};
use crate::device::presence::Presence;

/// `Builder` is a struct that assembles a `DeviceConfig` piece by piece -- handy when a config is
/// built in code rather than loaded from yaml. Nothing is validated or defaulted here, defaults
/// are applied when the config is rendered.
#[derive(Default)]
pub struct Builder {
    config: DeviceConfig,
}

#[allow(clippy::missing_const_for_fn)]
#[allow(clippy::return_self_not_must_use)]
#[allow(clippy::must_use_candidate)]
impl Builder {
    /// Return a new instance of `Builder` with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ios `version` tag.
    pub fn version(
        mut self,
        s: &str,
    ) -> Self {
        self.config.version = Some(s.to_owned());

        self
    }

    /// Sets the global `service` directives.
    pub fn services(
        mut self,
        services: ServicesConfig,
    ) -> Self {
        self.config.services = services;

        self
    }

    /// Sets the `hostname`.
    pub fn hostname(
        mut self,
        s: &str,
    ) -> Self {
        self.config.hostname = Some(s.to_owned());

        self
    }

    /// Sets the `enable secret`.
    pub fn enable_secret(
        mut self,
        secret: EnableSecret,
    ) -> Self {
        self.config.enable_secret = Some(secret);

        self
    }

    /// Sets the (plaintext) `enable password`.
    pub fn enable_password(
        mut self,
        s: &str,
    ) -> Self {
        self.config.enable_password = Some(s.to_owned());

        self
    }

    /// Enables `aaa new-model` with the given authentication method lists.
    pub fn aaa(
        mut self,
        authentication: AuthenticationConfig,
    ) -> Self {
        self.config.aaa_new_model = Some(AaaConfig { authentication });

        self
    }

    /// Appends a local user, users are rendered in the order they are added.
    pub fn user(
        mut self,
        user: User,
    ) -> Self {
        self.config.users.push(user);

        self
    }

    /// Sets `ip cef` and `ipv6 cef`.
    pub fn cef(
        mut self,
        ipv4: bool,
        ipv6: bool,
    ) -> Self {
        self.config.ip_cef = Some(ipv4);
        self.config.ipv6_cef = Some(ipv6);

        self
    }

    /// Sets the dns lookup toggle.
    pub fn domain_lookup(
        mut self,
        b: bool,
    ) -> Self {
        self.config.ip_domain_lookup = Some(b);

        self
    }

    /// Sets the `ip domain-name`.
    pub fn domain_name(
        mut self,
        s: &str,
    ) -> Self {
        self.config.ip_domain_name = Some(s.to_owned());

        self
    }

    /// Sets the `banner motd` text.
    pub fn banner_motd(
        mut self,
        s: &str,
    ) -> Self {
        self.config.banner_motd = Some(s.to_owned());

        self
    }

    /// Sets the spanning tree mode.
    pub fn spanning_tree_mode(
        mut self,
        mode: SpanningTreeMode,
    ) -> Self {
        self.config.spanning_tree_mode = Some(mode);

        self
    }

    /// Appends an interface, interfaces are rendered in the order they are added.
    pub fn interface(
        mut self,
        interface: Interface,
    ) -> Self {
        self.config.interfaces.push(interface);

        self
    }

    /// Sets the OSPF routing process.
    pub fn ospf(
        mut self,
        ospf: OspfConfig,
    ) -> Self {
        self.config.router_ospf = Some(ospf);

        self
    }

    /// Sets `ip classless`.
    pub fn classless(
        mut self,
        b: bool,
    ) -> Self {
        self.config.ip_classless = Some(b);

        self
    }

    /// Appends a static route, routes are rendered in the order they are added.
    pub fn static_route(
        mut self,
        route: StaticRoute,
    ) -> Self {
        self.config.ip_route.get_or_insert_with(Vec::new).push(route);

        self
    }

    /// Enables netflow export, at the given version or the default version if `None`.
    pub fn flow_export(
        mut self,
        version: Option<u16>,
    ) -> Self {
        self.config.ip_flow_export = Presence::from_parts(true, version);

        self
    }

    /// Sets the config of one of the three line classes.
    pub fn line(
        mut self,
        class: LineClass,
        line: LineConfig,
    ) -> Self {
        match class {
            LineClass::Console => self.config.line_con = Some(line),
            LineClass::Auxiliary => self.config.line_aux = Some(line),
            LineClass::VirtualTerminal => self.config.line_vty = Some(line),
        }

        self
    }

    /// Build "builds" and returns the `DeviceConfig`.
    #[must_use]
    pub fn build(self) -> DeviceConfig {
        self.config
    }
}
