use crate::codec::credential::encode;
use crate::codec::mask::{
    prefix_to_mask,
    prefix_to_wildcard,
};
use crate::device::config::{
    Interface,
    OspfConfig,
    StaticRoute,
    User,
};
use crate::errors::RenderError;
use crate::render::constants::{
    DEFAULT_DUPLEX,
    DEFAULT_LOG_ADJACENCY_CHANGES,
    DEFAULT_PRIVILEGE,
    DEFAULT_SPEED,
    PLACEHOLDER,
};

/// Renders a single interface block (without its trailing separator). The sub-order is fixed:
/// description, address, duplex, speed, mtu, clock rate, shutdown.
///
/// # Errors
///
/// Returns `RenderError::InvalidPrefix` if the interface address has a prefix longer than 32.
pub fn render_interface(interface: &Interface) -> Result<Vec<String>, RenderError> {
    let mut lines = vec![format!("interface {}", interface.port)];

    if let Some(description) = &interface.description {
        lines.push(format!(" description {description}"));
    }

    match &interface.ip4_address {
        Some(address) => lines.push(format!(
            " ip address {} {}",
            address.ip,
            prefix_to_mask(address.subnet_prefix)?
        )),
        None => lines.push(" no ip address".to_owned()),
    }

    lines.push(format!(
        " duplex {}",
        interface.duplex.unwrap_or(DEFAULT_DUPLEX)
    ));
    lines.push(format!(" speed {}", interface.speed.unwrap_or(DEFAULT_SPEED)));

    if let Some(mtu) = interface.mtu {
        lines.push(format!(" mtu {mtu}"));
    }

    if let Some(clock_rate) = interface.clock_rate {
        lines.push(format!(" clock rate {clock_rate}"));
    }

    if interface.shutdown == Some(true) {
        lines.push(" shutdown".to_owned());
    }

    Ok(lines)
}

/// Renders every interface in input order, each block followed by a separator. No interfaces
/// still leaves a single separator.
///
/// # Errors
///
/// Returns `RenderError::InvalidPrefix` if any interface address has an invalid prefix.
pub fn render_interfaces(interfaces: &[Interface]) -> Result<Vec<String>, RenderError> {
    if interfaces.is_empty() {
        return Ok(vec![PLACEHOLDER.to_owned()]);
    }

    let mut lines = vec![];

    for interface in interfaces {
        lines.extend(render_interface(interface)?);
        lines.push(PLACEHOLDER.to_owned());
    }

    Ok(lines)
}

/// Renders the `router ospf` block: process, adjacency logging, passive interfaces then network
/// statements with wildcard masks.
///
/// # Errors
///
/// Returns `RenderError::InvalidPrefix` if any network has an invalid prefix.
pub fn render_ospf(ospf: &OspfConfig) -> Result<Vec<String>, RenderError> {
    let mut lines = vec![format!("router ospf {}", ospf.process_id)];

    // the device echoes this one with a trailing space, keep it
    if ospf
        .log_adjacency_changes
        .unwrap_or(DEFAULT_LOG_ADJACENCY_CHANGES)
    {
        lines.push(" log-adjacency-changes ".to_owned());
    } else {
        lines.push(" no log-adjacency-changes ".to_owned());
    }

    for port in ospf.passive_interfaces.iter().flatten() {
        lines.push(format!(" passive-interface {port}"));
    }

    for network in &ospf.networks {
        lines.push(format!(
            " network {} {} area {}",
            network.ip_address,
            prefix_to_wildcard(network.subnet_prefix)?,
            network.area
        ));
    }

    Ok(lines)
}

/// Renders one `ip route` line per route, or a placeholder if there are none.
///
/// # Errors
///
/// Returns `RenderError::InvalidPrefix` if any route has an invalid prefix.
pub fn render_static_routes(routes: &[StaticRoute]) -> Result<Vec<String>, RenderError> {
    if routes.is_empty() {
        return Ok(vec![PLACEHOLDER.to_owned()]);
    }

    routes
        .iter()
        .map(|route| -> Result<String, RenderError> {
            Ok(format!(
                "ip route {} {} {}",
                route.destination,
                prefix_to_mask(route.subnet_prefix)?,
                route.forwarding_router
            ))
        })
        .collect()
}

/// Renders one `username` line per user, or a placeholder if there are none.
///
/// # Errors
///
/// Returns `RenderError::UnsupportedCredential` if a users password can not be encoded.
pub fn render_users(users: &[User]) -> Result<Vec<String>, RenderError> {
    if users.is_empty() {
        return Ok(vec![PLACEHOLDER.to_owned()]);
    }

    users
        .iter()
        .map(|user| -> Result<String, RenderError> {
            let encryption_type = user.password.encryption_type.unwrap_or_default();

            Ok(format!(
                "username {} privilege {} password {encryption_type} {}",
                user.username,
                user.privilege.unwrap_or(DEFAULT_PRIVILEGE),
                encode(&user.password.plaintext, encryption_type)?
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::credential::EncryptionType;
    use crate::device::config::{
        Duplex,
        InterfaceType,
        Ipv4Interface,
        OspfNetwork,
        PortId,
        Speed,
        UserPassword,
        Username,
    };
    use std::net::Ipv4Addr;

    fn fast_ethernet_0_0() -> Interface {
        let mut interface = Interface::new(PortId::new(InterfaceType::FastEthernet, "0/0"));
        interface.ip4_address = Some(Ipv4Interface {
            ip: Ipv4Addr::new(10, 0, 0, 1),
            subnet_prefix: 30,
        });

        interface
    }

    #[test]
    fn minimal_interface_block() {
        assert_eq!(
            render_interface(&fast_ethernet_0_0()).unwrap(),
            vec![
                "interface FastEthernet0/0",
                " ip address 10.0.0.1 255.255.255.252",
                " duplex auto",
                " speed auto",
            ]
        );
    }

    #[test]
    fn interface_with_every_field() {
        let mut interface = Interface::new(PortId::new(InterfaceType::Serial, "0/0/0"));
        interface.description = Some("WAN uplink".to_owned());
        interface.clock_rate = Some(64000);
        interface.duplex = Some(Duplex::Full);
        interface.speed = Some(Speed::Hundred);
        interface.mtu = Some(1400);
        interface.shutdown = Some(true);

        assert_eq!(
            render_interface(&interface).unwrap(),
            vec![
                "interface Serial0/0/0",
                " description WAN uplink",
                " no ip address",
                " duplex full",
                " speed 100",
                " mtu 1400",
                " clock rate 64000",
                " shutdown",
            ]
        );
    }

    #[test]
    fn interfaces_are_separated_and_keep_order() {
        let loopback = Interface::new(PortId::new(InterfaceType::Loopback, "0"));

        let lines = render_interfaces(&[loopback.clone(), fast_ethernet_0_0(), loopback]).unwrap();

        let headers = lines
            .iter()
            .filter(|l| l.starts_with("interface"))
            .collect::<Vec<_>>();

        assert_eq!(
            headers,
            vec![
                "interface Loopback0",
                "interface FastEthernet0/0",
                "interface Loopback0"
            ]
        );
        assert_eq!(lines.iter().filter(|l| *l == "!").count(), 3);
        assert_eq!(lines.last().unwrap(), "!");

        assert_eq!(render_interfaces(&[]).unwrap(), vec!["!"]);
    }

    #[test]
    fn interface_with_bad_prefix_fails() {
        let mut interface = fast_ethernet_0_0();
        interface.ip4_address = Some(Ipv4Interface {
            ip: Ipv4Addr::new(10, 0, 0, 1),
            subnet_prefix: 33,
        });

        assert_eq!(
            render_interface(&interface),
            Err(RenderError::InvalidPrefix(33))
        );
    }

    #[test]
    fn ospf_block() {
        let ospf = OspfConfig {
            process_id: 10,
            log_adjacency_changes: Some(false),
            passive_interfaces: Some(vec![PortId::new(InterfaceType::GigabitEthernet, "0/1")]),
            networks: vec![
                OspfNetwork {
                    ip_address: Ipv4Addr::new(192, 168, 0, 0),
                    subnet_prefix: 24,
                    area: 0,
                },
                OspfNetwork {
                    ip_address: Ipv4Addr::new(10, 0, 0, 0),
                    subnet_prefix: 30,
                    area: 1,
                },
            ],
        };

        assert_eq!(
            render_ospf(&ospf).unwrap(),
            vec![
                "router ospf 10",
                " no log-adjacency-changes ",
                " passive-interface GigabitEthernet0/1",
                " network 192.168.0.0 0.0.0.255 area 0",
                " network 10.0.0.0 0.0.0.3 area 1",
            ]
        );
    }

    #[test]
    fn ospf_without_networks_has_no_blank_lines() {
        let ospf = OspfConfig {
            process_id: 1,
            log_adjacency_changes: None,
            passive_interfaces: None,
            networks: vec![],
        };

        assert_eq!(
            render_ospf(&ospf).unwrap(),
            vec!["router ospf 1", " log-adjacency-changes "]
        );
    }

    #[test]
    fn static_routes() {
        let routes = [
            StaticRoute {
                destination: Ipv4Addr::new(172, 16, 1, 0),
                subnet_prefix: 24,
                forwarding_router: Ipv4Addr::new(192, 168, 0, 5),
            },
            StaticRoute {
                destination: Ipv4Addr::new(0, 0, 0, 0),
                subnet_prefix: 0,
                forwarding_router: Ipv4Addr::new(192, 168, 0, 1),
            },
        ];

        assert_eq!(
            render_static_routes(&routes).unwrap(),
            vec![
                "ip route 172.16.1.0 255.255.255.0 192.168.0.5",
                "ip route 0.0.0.0 0.0.0.0 192.168.0.1",
            ]
        );
        assert_eq!(render_static_routes(&[]).unwrap(), vec!["!"]);
    }

    #[test]
    fn users_default_privilege_and_encoding() {
        let users = [
            User {
                username: Username::Cisco,
                privilege: None,
                password: UserPassword {
                    encryption_type: None,
                    plaintext: "cisco".to_owned(),
                },
            },
            User {
                username: Username::Class,
                privilege: Some(1),
                password: UserPassword {
                    encryption_type: Some(EncryptionType::Vigenere),
                    plaintext: "class".to_owned(),
                },
            },
        ];

        assert_eq!(
            render_users(&users).unwrap(),
            vec![
                "username cisco privilege 15 password 0 cisco",
                "username class privilege 1 password 7 0822404F1A0A",
            ]
        );
        assert_eq!(render_users(&[]).unwrap(), vec!["!"]);
    }

    #[test]
    fn user_with_unknown_encoded_password_fails() {
        let users = [User {
            username: Username::Cisco,
            privilege: None,
            password: UserPassword {
                encryption_type: Some(EncryptionType::Md5),
                plaintext: "p@ss".to_owned(),
            },
        }];

        assert!(matches!(
            render_users(&users),
            Err(RenderError::UnsupportedCredential { .. })
        ));
    }
}
