use crate::codec::credential::{
    encode,
    EncryptionType,
};
use crate::device::config::{
    LineClass,
    LineConfig,
    LinePassword,
    LoginPolicy,
};
use crate::errors::RenderError;
use crate::render::constants::{
    DEFAULT_LINE_PORT_START,
    DEFAULT_VTY_PORT_END,
    PLACEHOLDER,
};

/// Returns the default last line number for `class` -- only vty lines have one.
#[must_use]
pub const fn default_port_end(class: LineClass) -> Option<u16> {
    match class {
        LineClass::VirtualTerminal => Some(DEFAULT_VTY_PORT_END),
        LineClass::Console | LineClass::Auxiliary => None,
    }
}

/// Renders the `line <class> <start> <end>` header. An unset end port (with no default for the
/// class) is left empty, the trailing space is kept.
#[must_use]
pub fn render_line_header(
    class: LineClass,
    config: Option<&LineConfig>,
) -> String {
    let start = config
        .and_then(|c| c.port_start)
        .unwrap_or(DEFAULT_LINE_PORT_START);

    let end = config
        .and_then(|c| c.port_end)
        .or_else(|| default_port_end(class))
        .map(|end| end.to_string())
        .unwrap_or_default();

    format!("line {class} {start} {end}")
}

/// Renders the five line body sub-lines in their fixed order: exec-timeout, password, logging,
/// login and transport input. Unset password, logging and transport input each leave an indented
/// placeholder so the body is always five lines long.
///
/// # Errors
///
/// Returns `RenderError::UnsupportedCredential` if an encoded line password can not be encoded.
pub fn render_line_block(config: &LineConfig) -> Result<Vec<String>, RenderError> {
    let minutes = config
        .exec_timeout
        .minutes
        .map(|m| m.to_string())
        .unwrap_or_default();

    let password = match &config.password {
        Some(password) => render_line_password(password)?,
        None => PLACEHOLDER.to_owned(),
    };

    let logging = config
        .logging
        .map_or_else(|| PLACEHOLDER.to_owned(), |l| format!("logging {l}"));

    let transport = config.transport_input.map_or_else(
        || PLACEHOLDER.to_owned(),
        |t| format!("transport input {t}"),
    );

    Ok(vec![
        format!(" exec-timeout {minutes} {}", config.exec_timeout.seconds),
        format!(" {password}"),
        format!(" {logging}"),
        format!(" {}", render_login(config.login.as_ref())),
        format!(" {transport}"),
    ])
}

/// Renders the header and, if the line class is configured, its body.
///
/// # Errors
///
/// Returns `RenderError::UnsupportedCredential` if an encoded line password can not be encoded.
pub fn render_line_stanza(
    class: LineClass,
    config: Option<&LineConfig>,
) -> Result<Vec<String>, RenderError> {
    let mut lines = vec![render_line_header(class, config)];

    if let Some(config) = config {
        lines.extend(render_line_block(config)?);
    }

    Ok(lines)
}

fn render_line_password(password: &LinePassword) -> Result<String, RenderError> {
    let encryption_type = password.encryption_type.unwrap_or_default();
    let encoded = encode(&password.plaintext, encryption_type)?;

    if encryption_type == EncryptionType::Plaintext {
        return Ok(format!("password {encoded}"));
    }

    Ok(format!("password {encryption_type} {encoded}"))
}

fn render_login(login: Option<&LoginPolicy>) -> String {
    let Some(login) = login else {
        return "no login".to_owned();
    };

    match &login.method_list {
        Some(method_list) => format!("login {} {method_list}", login.method),
        None => format!("login {}", login.method),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::config::{
        ExecTimeout,
        LineLogging,
        LoginMethod,
        TransportInput,
    };

    fn timeout(
        minutes: Option<u32>,
        seconds: u32,
    ) -> ExecTimeout {
        ExecTimeout { minutes, seconds }
    }

    #[test]
    fn headers_use_class_defaults() {
        assert_eq!(render_line_header(LineClass::Console, None), "line con 0 ");
        assert_eq!(render_line_header(LineClass::Auxiliary, None), "line aux 0 ");
        assert_eq!(
            render_line_header(LineClass::VirtualTerminal, None),
            "line vty 0 4"
        );

        let mut vty = LineConfig::new(timeout(None, 0));
        vty.port_end = Some(15);
        assert_eq!(
            render_line_header(LineClass::VirtualTerminal, Some(&vty)),
            "line vty 0 15"
        );

        let mut con = LineConfig::new(timeout(None, 0));
        con.port_start = Some(1);
        con.port_end = Some(2);
        assert_eq!(
            render_line_header(LineClass::Console, Some(&con)),
            "line con 1 2"
        );
    }

    #[test]
    fn bare_block_is_placeholders_and_no_login() {
        let block = render_line_block(&LineConfig::new(timeout(None, 30))).unwrap();

        assert_eq!(
            block,
            vec![
                " exec-timeout  30",
                " !",
                " !",
                " no login",
                " !"
            ]
        );
    }

    #[test]
    fn full_block() {
        let mut config = LineConfig::new(timeout(Some(0), 60));
        config.logging = Some(LineLogging::Synchronous);
        config.login = Some(LoginPolicy {
            method: LoginMethod::Authentication,
            method_list: Some("default".to_owned()),
        });
        config.transport_input = Some(TransportInput::Ssh);
        config.password = Some(LinePassword {
            plaintext: "class".to_owned(),
            encryption_type: None,
        });

        assert_eq!(
            render_line_block(&config).unwrap(),
            vec![
                " exec-timeout 0 60",
                " password class",
                " logging synchronous",
                " login authentication default",
                " transport input ssh",
            ]
        );
    }

    #[test]
    fn local_login_without_method_list() {
        assert_eq!(
            render_login(Some(&LoginPolicy {
                method: LoginMethod::Local,
                method_list: None,
            })),
            "login local"
        );
    }

    #[test]
    fn encoded_line_password() {
        let password = LinePassword {
            plaintext: "cisco".to_owned(),
            encryption_type: Some(EncryptionType::Vigenere),
        };
        assert_eq!(
            render_line_password(&password).unwrap(),
            "password 7 0822455D0A16"
        );

        let password = LinePassword {
            plaintext: "letmein".to_owned(),
            encryption_type: Some(EncryptionType::Vigenere),
        };
        assert!(render_line_password(&password).is_err());
    }

    #[test]
    fn stanza_for_unconfigured_class_is_header_only() {
        assert_eq!(
            render_line_stanza(LineClass::Auxiliary, None).unwrap(),
            vec!["line aux 0 "]
        );
    }
}
