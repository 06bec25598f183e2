//! Console banner printed at startup.
//!
//! Besides the name and version it lists every URL the API can be reached on,
//! so the operator can copy one straight into a client.

use std::io::{self, IsTerminal, Write};
use std::net::IpAddr;

use colored::*;
use tracing::warn;

pub const APP_NAME_ART: &str = "\
░█░█░█▀▀░█░█░█▀▀░█▀█░█▀█░▀█▀░█▀▄░█▀█░█░░
░█▀▄░█▀▀░░█░░█░░░█░█░█░█░░█░░█▀▄░█░█░█░░
░▀░▀░▀▀▀░░▀░░▀▀▀░▀▀▀░▀░▀░░▀░░▀░▀░▀▀▀░▀▀▀";

pub const REPOSITORY_URL: &str = "https://github.com/itpey/keycontrol";

/// Virtual adapters created by desktop hypervisors; never reachable from
/// other machines.
const HOST_ONLY_MARKER: &str = "Host-Only Network";

/// Name prefixes of point-to-point links (VPN tunnels, PPP).
const POINT_TO_POINT_PREFIXES: &[&str] = &["tun", "ppp", "wg", "utun"];

/// One address assigned to a local network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub name: String,
    pub ip: IpAddr,
    pub is_loopback: bool,
    pub is_point_to_point: bool,
}

impl InterfaceAddr {
    fn is_advertised(&self) -> bool {
        self.ip.is_ipv4()
            && !self.is_loopback
            && !self.is_point_to_point
            && !self.name.contains(HOST_ONLY_MARKER)
    }
}

/// Addresses of the interfaces that currently have one assigned.
///
/// Enumeration failures are logged and yield an empty list; the banner then
/// shows only the loopback URL.
pub fn local_interfaces() -> Vec<InterfaceAddr> {
    match if_addrs::get_if_addrs() {
        Ok(interfaces) => interfaces
            .into_iter()
            .map(|iface| InterfaceAddr {
                is_loopback: iface.is_loopback(),
                is_point_to_point: is_point_to_point_name(&iface.name),
                ip: iface.ip(),
                name: iface.name,
            })
            .collect(),
        Err(e) => {
            warn!("could not enumerate network interfaces: {e}");
            Vec::new()
        }
    }
}

fn is_point_to_point_name(name: &str) -> bool {
    POINT_TO_POINT_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// The API URLs to advertise, in interface order, loopback last.
pub fn banner_urls(interfaces: &[InterfaceAddr], port: u16) -> Vec<String> {
    interfaces
        .iter()
        .filter(|iface| iface.is_advertised())
        .map(|iface| format!("http://{}:{port}", iface.ip))
        .chain(std::iter::once(format!("http://127.0.0.1:{port}")))
        .collect()
}

/// Renders the full banner.  Colours are dropped automatically when stdout
/// is not a terminal.
pub fn render_banner(version: &str, urls: &[String]) -> String {
    format!(
        "{}\nWelcome to KeyControl!\n{}{version} | OS/Arch: {}/{}\n{}{}\n{}{REPOSITORY_URL}\n{}{}\n",
        APP_NAME_ART.bright_blue(),
        "Version: ".yellow(),
        std::env::consts::OS,
        std::env::consts::ARCH,
        "Status: ".yellow(),
        "Online".green(),
        "Documentation: ".yellow(),
        "API: ".yellow(),
        urls.join(" | "),
    )
}

/// Clears the console and prints the banner for a server on `port`.
pub fn print_banner(version: &str, port: u16) {
    let urls = banner_urls(&local_interfaces(), port);
    let mut stdout = io::stdout().lock();
    if stdout.is_terminal() {
        let _ = write!(stdout, "\x1B[2J\x1B[1;1H");
    }
    let _ = write!(stdout, "{}", render_banner(version, &urls));
    let _ = stdout.flush();
}
