use crate::codec::credential::encode;
use crate::device::config::{
    AuthenticationMethod,
    DeviceConfig,
    LineClass,
};
use crate::errors::RenderError;
use crate::render::constants::{
    DEFAULT_FLOW_EXPORT_VERSION,
    DEFAULT_IPV6_CEF,
    DEFAULT_IP_CEF,
    DEFAULT_IP_CLASSLESS,
    DEFAULT_PASSWORD_ENCRYPTION,
    DEFAULT_SPANNING_TREE_MODE,
    DEFAULT_TIMESTAMP_MODE,
    DEFAULT_VERSION,
    PLACEHOLDER,
    TERMINATOR,
};
use crate::render::line::render_line_stanza;
use crate::render::stanza::{
    render_interfaces,
    render_ospf,
    render_static_routes,
    render_users,
};
use log::{
    debug,
    info,
};

/// The signature every section renderer implements -- sections only ever read the config.
pub type SectionRenderer = fn(c: &DeviceConfig) -> Result<Vec<String>, RenderError>;

/// `Section` is one entry of the fixed document layout: a renderer plus the number of separator
/// lines emitted before and after it. Separators are emitted whether or not the section had
/// anything to say, that is what keeps the layout stable.
pub struct Section {
    /// Name of the section, used for logging and layout checks.
    pub name: &'static str,
    /// Separator lines emitted before the section content.
    pub leading: usize,
    /// Produces the section content.
    pub render: SectionRenderer,
    /// Separator lines emitted after the section content.
    pub trailing: usize,
}

const fn section(
    name: &'static str,
    leading: usize,
    render: SectionRenderer,
    trailing: usize,
) -> Section {
    Section {
        name,
        leading,
        render,
        trailing,
    }
}

/// The document layout, in output order. Do not reorder, the device parser expects exactly this.
pub static SECTIONS: [Section; 19] = [
    section("version", 1, render_version, 0),
    section("services", 0, render_services, 1),
    section("hostname", 0, render_hostname, 3),
    section("enable", 0, render_enable, 5),
    section("aaa", 0, render_aaa, 7),
    section("forwarding", 0, render_forwarding, 3),
    section("users", 0, render_user_section, 8),
    section("domain", 0, render_domain, 2),
    section("spanning-tree", 0, render_spanning_tree, 6),
    section("interfaces", 0, render_interface_section, 0),
    section("ospf", 0, render_ospf_section, 1),
    section("classless", 0, render_classless, 0),
    section("routes", 0, render_route_section, 1),
    section("flow-export", 0, render_flow_export, 3),
    section("banner", 0, render_banner, 5),
    section("line-con", 0, render_line_con, 1),
    section("line-aux", 0, render_line_aux, 1),
    section("line-vty", 0, render_line_vty, 1),
    section("end", 2, render_end, 0),
];

/// Returns the section names in the order they are rendered.
#[must_use]
pub fn layout() -> Vec<&'static str> {
    SECTIONS.iter().map(|s| s.name).collect()
}

/// Renders `config` into the lines of an ios configuration, without line terminators.
///
/// # Errors
///
/// Returns the first `RenderError` any section hits; nothing is returned in that case.
pub fn render_lines(config: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    let mut lines = vec![];

    for section in &SECTIONS {
        debug!("rendering section '{}'", section.name);

        push_placeholders(&mut lines, section.leading);
        lines.extend((section.render)(config)?);
        push_placeholders(&mut lines, section.trailing);
    }

    Ok(lines)
}

/// Renders `config` into the complete, newline terminated ios configuration text. The output is
/// a pure function of `config`: identical input always yields identical text.
///
/// # Errors
///
/// Returns `RenderError::InvalidPrefix` if any interface, ospf network or route has a prefix
/// outside of 0 through 32, or `RenderError::UnsupportedCredential` if a secret or password needs
/// an encoding the credential table does not have.
pub fn render_config(config: &DeviceConfig) -> Result<String, RenderError> {
    let lines = render_lines(config)?;

    info!(
        "rendered config for '{}', {} lines",
        config.hostname.as_deref().unwrap_or("<no hostname>"),
        lines.len()
    );

    let mut out = lines.join("\n");
    out.push('\n');

    Ok(out)
}

fn push_placeholders(
    lines: &mut Vec<String>,
    n: usize,
) {
    lines.extend(core::iter::repeat(PLACEHOLDER.to_owned()).take(n));
}

/// " directive" when enabled, "no directive" when not.
fn service_toggle(
    enabled: bool,
    directive: &str,
) -> String {
    if enabled {
        format!(" {directive}")
    } else {
        format!("no {directive}")
    }
}

fn placeholder_or(line: Option<String>) -> String {
    line.unwrap_or_else(|| PLACEHOLDER.to_owned())
}

fn render_version(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    Ok(vec![format!(
        "version {}",
        c.version.as_deref().unwrap_or(DEFAULT_VERSION)
    )])
}

fn render_services(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    let services = &c.services;

    Ok(vec![
        service_toggle(
            services.timestamps_log.is_present(),
            &format!(
                "service timestamps log {}",
                services.timestamps_log.value_or(DEFAULT_TIMESTAMP_MODE)
            ),
        ),
        service_toggle(
            services.timestamps_debug.is_present(),
            &format!(
                "service timestamps debug {}",
                services.timestamps_debug.value_or(DEFAULT_TIMESTAMP_MODE)
            ),
        ),
        service_toggle(
            services
                .password_encryption
                .unwrap_or(DEFAULT_PASSWORD_ENCRYPTION),
            "service password-encryption",
        ),
    ])
}

fn render_hostname(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    Ok(vec![placeholder_or(
        c.hostname.as_ref().map(|h| format!("hostname {h}")),
    )])
}

fn render_enable(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    let secret = match &c.enable_secret {
        Some(secret) => format!(
            "enable secret {} {}",
            secret.encryption_type,
            encode(&secret.plaintext, secret.encryption_type)?
        ),
        None => PLACEHOLDER.to_owned(),
    };

    let password = placeholder_or(
        c.enable_password
            .as_ref()
            .map(|p| format!("enable password {p}")),
    );

    Ok(vec![secret, password])
}

fn render_authentication(
    name: &str,
    method: Option<&AuthenticationMethod>,
) -> String {
    placeholder_or(method.map(|m| {
        let sources = m
            .source
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        format!("aaa authentication {name} {} {sources}", m.method_list)
    }))
}

fn render_aaa(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    let aaa = c.aaa_new_model.as_ref();
    let authentication = aaa.map(|a| &a.authentication);

    Ok(vec![
        placeholder_or(aaa.map(|_| "aaa new-model".to_owned())),
        PLACEHOLDER.to_owned(),
        render_authentication("login", authentication.and_then(|a| a.login.as_ref())),
        render_authentication("enable", authentication.and_then(|a| a.enable.as_ref())),
        render_authentication("ppp", authentication.and_then(|a| a.ppp.as_ref())),
    ])
}

fn render_forwarding(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    Ok(vec![
        service_toggle(c.ip_cef.unwrap_or(DEFAULT_IP_CEF), "ip cef"),
        service_toggle(c.ipv6_cef.unwrap_or(DEFAULT_IPV6_CEF), "ipv6 cef"),
    ])
}

fn render_user_section(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    render_users(&c.users)
}

fn render_domain(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    Ok(vec![placeholder_or(
        c.ip_domain_name
            .as_ref()
            .map(|d| format!("ip domain-name {d}")),
    )])
}

fn render_spanning_tree(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    Ok(vec![format!(
        "spanning-tree mode {}",
        c.spanning_tree_mode.unwrap_or(DEFAULT_SPANNING_TREE_MODE)
    )])
}

fn render_interface_section(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    render_interfaces(&c.interfaces)
}

fn render_ospf_section(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    match &c.router_ospf {
        Some(ospf) => render_ospf(ospf),
        None => Ok(vec![PLACEHOLDER.to_owned()]),
    }
}

fn render_classless(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    if c.ip_classless.unwrap_or(DEFAULT_IP_CLASSLESS) {
        Ok(vec!["ip classless".to_owned()])
    } else {
        Ok(vec!["no ip classless".to_owned()])
    }
}

fn render_route_section(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    render_static_routes(c.ip_route.as_deref().unwrap_or_default())
}

fn render_flow_export(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    Ok(vec![format!(
        "ip flow-export {}",
        c.ip_flow_export.value_or(DEFAULT_FLOW_EXPORT_VERSION)
    )])
}

fn render_banner(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    Ok(vec![placeholder_or(
        c.banner_motd
            .as_ref()
            .map(|b| format!("banner motd # {b} #")),
    )])
}

fn render_line_con(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    render_line_stanza(LineClass::Console, c.line_con.as_ref())
}

fn render_line_aux(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    render_line_stanza(LineClass::Auxiliary, c.line_aux.as_ref())
}

fn render_line_vty(c: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    render_line_stanza(LineClass::VirtualTerminal, c.line_vty.as_ref())
}

fn render_end(_: &DeviceConfig) -> Result<Vec<String>, RenderError> {
    Ok(vec![TERMINATOR.to_owned()])
}
