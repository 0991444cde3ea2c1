//! Network interface discovery
//!
//! Polls the output of `ip addr` until an interface in the wanted state is
//! seen, or a deadline elapses. Interface listings are multi-line, with the
//! `inet` address following the `state UP`/`state DOWN` line at a small,
//! non-fixed offset, so parsing is done with a line-by-line state machine
//! rather than a fixed grammar.

use std::thread;
use std::time::Duration;

use serde::Serialize;

use super::ip_cmd::{self, CommandError};

const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkState {
    Up,
    Down,
    // `state UNKNOWN` lines (e.g. loopback) never open a candidate
    #[allow(dead_code)]
    Unknown,
}

/// One parsed snapshot of an interface's name, address and link state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceRecord {
    pub name: String,
    pub address: String,
    pub state: LinkState,
}

#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub timeout_secs: u64,
    pub include_down: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 1,
            include_down: false,
        }
    }
}

struct Pending {
    name: String,
    state: LinkState,
}

/// Line-by-line parser over `ip addr` output.
///
/// A `state UP` (or, if enabled, `state DOWN`) line opens a candidate; the
/// next `inet` line completes it. A candidate with no address before the
/// next state line, or before end of output, is dropped. Lines that match
/// neither marker are skipped.
struct LineParser {
    include_down: bool,
    pending: Option<Pending>,
}

impl LineParser {
    fn new(include_down: bool) -> Self {
        Self {
            include_down,
            pending: None,
        }
    }

    fn feed(&mut self, line: &str) -> Option<InterfaceRecord> {
        let line = line.trim();

        if let Some(state) = self.state_marker(line) {
            // Interface name sits between the first and second colon,
            // e.g. "2: eth0: <BROADCAST,...> mtu 1500 ... state UP ..."
            self.pending = interface_name(line).map(|name| Pending { name, state });
            return None;
        }

        if line.contains("inet") {
            if let Some(address) = line.split_whitespace().nth(1) {
                if let Some(Pending { name, state }) = self.pending.take() {
                    return Some(InterfaceRecord {
                        name,
                        address: address.to_string(),
                        state,
                    });
                }
            }
        }

        None
    }

    fn state_marker(&self, line: &str) -> Option<LinkState> {
        if line.contains("state UP") {
            Some(LinkState::Up)
        } else if self.include_down && line.contains("state DOWN") {
            Some(LinkState::Down)
        } else {
            None
        }
    }
}

fn interface_name(line: &str) -> Option<String> {
    line.split(':')
        .nth(1)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Returns the first interface in state UP together with its address, or
/// `None` if no such interface shows up within `timeout_secs` seconds.
///
/// The listing command runs at least once, also for a zero timeout, and a
/// failure to run it aborts the poll immediately.
pub fn find_first_up(timeout_secs: u64) -> Result<Option<InterfaceRecord>, CommandError> {
    poll_first_up(ip_cmd::list_addresses, timeout_secs)
}

/// Returns all interfaces found in one listing, retrying until at least one
/// parses or the timeout elapses. Record order follows the command output.
pub fn find_all(config: PollConfig) -> Result<Vec<InterfaceRecord>, CommandError> {
    poll_all(ip_cmd::list_addresses, config)
}

fn poll_first_up<F>(mut list: F, timeout_secs: u64) -> Result<Option<InterfaceRecord>, CommandError>
where
    F: FnMut() -> Result<String, CommandError>,
{
    let mut elapsed = 0;
    loop {
        let output = list()?;
        let mut parser = LineParser::new(false);
        for line in output.lines() {
            if let Some(record) = parser.feed(line) {
                return Ok(Some(record));
            }
        }
        if elapsed >= timeout_secs {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
        elapsed += 1;
    }
}

fn poll_all<F>(mut list: F, config: PollConfig) -> Result<Vec<InterfaceRecord>, CommandError>
where
    F: FnMut() -> Result<String, CommandError>,
{
    let mut elapsed = 0;
    loop {
        let output = list()?;
        let mut parser = LineParser::new(config.include_down);
        let records: Vec<InterfaceRecord> =
            output.lines().filter_map(|line| parser.feed(line)).collect();
        if !records.is_empty() {
            return Ok(records);
        }
        if elapsed >= config.timeout_secs {
            return Ok(records);
        }
        thread::sleep(POLL_INTERVAL);
        elapsed += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    const TWO_IFACES_UP: &str = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN group default qlen 1000
    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00
    inet 127.0.0.1/8 scope host lo
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default qlen 1000
    link/ether aa:bb:cc:dd:ee:01 brd ff:ff:ff:ff:ff:ff
    inet 10.0.0.5/24 brd 10.0.0.255 scope global eth0
    inet6 fe80::1/64 scope link
3: eth1: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default qlen 1000
    link/ether aa:bb:cc:dd:ee:02 brd ff:ff:ff:ff:ff:ff
    inet 192.168.1.7/24 brd 192.168.1.255 scope global eth1
";

    const UP_AND_DOWN: &str = "\
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default qlen 1000
    link/ether aa:bb:cc:dd:ee:01 brd ff:ff:ff:ff:ff:ff
    inet 10.0.0.5/24 brd 10.0.0.255 scope global eth0
3: eth1: <BROADCAST,MULTICAST> mtu 1500 qdisc fq_codel state DOWN group default qlen 1000
    link/ether aa:bb:cc:dd:ee:02 brd ff:ff:ff:ff:ff:ff
    inet 192.168.1.7/24 brd 192.168.1.255 scope global eth1
";

    fn parse_all(output: &str, include_down: bool) -> Vec<InterfaceRecord> {
        let mut parser = LineParser::new(include_down);
        output.lines().filter_map(|line| parser.feed(line)).collect()
    }

    #[test]
    fn parses_up_interfaces_in_output_order() {
        let records = parse_all(TWO_IFACES_UP, false);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "eth0");
        assert_eq!(records[0].address, "10.0.0.5/24");
        assert_eq!(records[0].state, LinkState::Up);
        assert_eq!(records[1].name, "eth1");
        assert_eq!(records[1].address, "192.168.1.7/24");
    }

    #[test]
    fn down_interfaces_are_skipped_unless_requested() {
        let records = parse_all(UP_AND_DOWN, false);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "eth0");

        let records = parse_all(UP_AND_DOWN, true);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "eth1");
        assert_eq!(records[1].state, LinkState::Down);
    }

    #[test]
    fn state_line_without_address_yields_no_record() {
        let output = "\
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default qlen 1000
    link/ether aa:bb:cc:dd:ee:01 brd ff:ff:ff:ff:ff:ff
3: eth1: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default qlen 1000
    link/ether aa:bb:cc:dd:ee:02 brd ff:ff:ff:ff:ff:ff
    inet 192.168.1.7/24 brd 192.168.1.255 scope global eth1
";
        // eth0's candidate is displaced by eth1's state line before any
        // inet line is seen, so only eth1 is reported.
        let records = parse_all(output, false);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "eth1");
    }

    #[test]
    fn dangling_candidate_at_end_of_output_is_dropped() {
        let output =
            "2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default";
        assert!(parse_all(output, false).is_empty());
    }

    #[test]
    fn inet_line_without_open_candidate_is_ignored() {
        let output = "    inet 127.0.0.1/8 scope host lo";
        assert!(parse_all(output, false).is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let output = "\
state UP
2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default qlen 1000
    inet
    inet 10.0.0.5/24 brd 10.0.0.255 scope global eth0
";
        // "state UP" with no name field and a bare "inet" line both parse to
        // nothing, without losing the open candidate.
        let records = parse_all(output, false);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "eth0");
        assert_eq!(records[0].address, "10.0.0.5/24");
    }

    #[test]
    fn first_up_returns_without_second_invocation() {
        let mut calls = 0;
        let record = poll_first_up(
            || {
                calls += 1;
                Ok(TWO_IFACES_UP.to_string())
            },
            2,
        )
        .unwrap()
        .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(record.name, "eth0");
        assert_eq!(record.address, "10.0.0.5/24");
    }

    #[test]
    fn first_up_times_out_with_retry_sleeps() {
        let mut calls = 0;
        let started = Instant::now();
        let result = poll_first_up(
            || {
                calls += 1;
                Ok(String::new())
            },
            2,
        )
        .unwrap();
        assert!(result.is_none());
        // One initial attempt plus one per elapsed second, final check at
        // the deadline included.
        assert_eq!(calls, 3);
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[test]
    fn zero_timeout_still_invokes_once() {
        let mut calls = 0;
        let result = poll_first_up(
            || {
                calls += 1;
                Ok(String::new())
            },
            0,
        )
        .unwrap();
        assert!(result.is_none());
        assert_eq!(calls, 1);
    }

    #[test]
    fn find_all_returns_empty_on_timeout() {
        let records = poll_all(
            || Ok("nothing useful here".to_string()),
            PollConfig {
                timeout_secs: 0,
                include_down: true,
            },
        )
        .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn command_failure_is_not_retried() {
        let mut calls = 0;
        let result = poll_first_up(
            || {
                calls += 1;
                Err(CommandError::Launch(std::io::Error::from(
                    std::io::ErrorKind::NotFound,
                )))
            },
            5,
        );
        assert!(result.is_err());
        assert_eq!(calls, 1);

        let mut calls = 0;
        let result = poll_all(
            || {
                calls += 1;
                Err(CommandError::Launch(std::io::Error::from(
                    std::io::ErrorKind::NotFound,
                )))
            },
            PollConfig::default(),
        );
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn minimal_two_line_listing() {
        let record = poll_first_up(
            || Ok("1: eth0: state UP\n    inet 10.0.0.5/24 ...\n".to_string()),
            0,
        )
        .unwrap()
        .unwrap();
        assert_eq!(record.name, "eth0");
        assert_eq!(record.address, "10.0.0.5/24");
    }
}
