//! Clone URL validation against the remote-host allow-list.
//!
//! Two policies are supported. [`HostPolicy::Substring`] accepts any URL that
//! mentions an allowed domain anywhere, which is permissive
//! (`evilgithub.com.attacker.net` passes). [`HostPolicy::Strict`] extracts the
//! host and requires it to be an allowed domain or one of its subdomains.

use serde::{Deserialize, Serialize};

/// Remote hosting domains a clone may come from
pub const ALLOWED_HOSTS: [&str; 3] = ["github.com", "gitlab.com", "bitbucket.org"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPolicy {
    #[default]
    Substring,
    Strict,
}

impl HostPolicy {
    pub fn accepts(&self, url: &str) -> bool {
        match self {
            HostPolicy::Substring => ALLOWED_HOSTS.iter().any(|host| url.contains(host)),
            HostPolicy::Strict => extract_host(url).is_some_and(|host| is_allowed_host(&host)),
        }
    }
}

fn is_allowed_host(host: &str) -> bool {
    ALLOWED_HOSTS.iter().any(|allowed| {
        host == *allowed
            || host
                .strip_suffix(allowed)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Extract the lowercase host from `scheme://[user@]host[:port]/path` or the
/// scp-like `user@host:path` form.
fn extract_host(url: &str) -> Option<String> {
    let url = url.trim();

    let authority = if let Some((_, rest)) = url.split_once("://") {
        rest.split(['/', '?', '#']).next()?
    } else {
        // scp-like syntax requires a user part and a ':' before any '/'
        let (user_host, _) = url.split_once(':')?;
        if !user_host.contains('@') || user_host.contains('/') {
            return None;
        }
        user_host
    };

    let host_port = authority.rsplit('@').next()?;
    let host = host_port.split(':').next()?;

    if host.is_empty() {
        return None;
    }
    Some(host.to_ascii_lowercase())
}
