use std::net::IpAddr;

use gridmon_model::ResolvedAddr;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use tracing::debug;

/// Resolves the reverse-DNS name of `ip`, best effort.
///
/// Uses the system resolver configuration when it can be read, public
/// defaults otherwise. A failed lookup is logged and yields an address
/// without a name; endpoint matching then compares the literal address
/// instead.
pub async fn resolve_addr(ip: IpAddr) -> ResolvedAddr {
    let resolver = match TokioAsyncResolver::tokio_from_system_conf() {
        Ok(resolver) => resolver,
        Err(err) => {
            debug!("system resolver config unavailable: {err}");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        }
    };

    match resolver.reverse_lookup(ip).await {
        Ok(ptr) => match ptr.iter().next() {
            Some(name) => {
                let name = name.to_string();
                ResolvedAddr::with_hostname(ip, name.trim_end_matches('.'))
            }
            None => ResolvedAddr::new(ip),
        },
        Err(err) => {
            debug!("reverse lookup failed for {ip}: {err}");
            ResolvedAddr::new(ip)
        }
    }
}
