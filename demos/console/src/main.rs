use std::net::{IpAddr, Ipv4Addr};

use tracing::info;

use gridmon_model::{FieldFilter, GridConfig, HostEndpoint};
use gridmon_observe::{LoggerConfig, LoggerLevel, init_logger};
use gridmon_rpc::auth::auth_digest;
use gridmon_rpc::extract::records;
use gridmon_rpc::message::render_message;
use gridmon_rpc::resolve::resolve_addr;
use gridmon_rpc::result::ResultRecord;

// Captured from a live client session, trimmed to two rows.
const SAMPLE_RESULTS: &str = r#"<boinc_gui_rpc_reply>
<get_results>
<result>
  <name>mmpbsa_wu_01142</name>
  <project_url>https://grid.example.org/chem</project_url>
  <fraction_done>0.7312</fraction_done>
  <current_cpu_time>5025.3</current_cpu_time>
  <estimated_cpu_time_remaining>90061</estimated_cpu_time_remaining>
  <active_task_state>1</active_task_state>
  <exit_status>0</exit_status>
</result>
<result>
  <name>mmpbsa_wu_01077</name>
  <project_url>https://grid.example.org/chem</project_url>
  <exit_status>-197</exit_status>
</result>
</get_results>
</boinc_gui_rpc_reply>"#;

const SAMPLE_MESSAGES: &str = r#"<boinc_gui_rpc_reply>
<msgs>
<msg>
  <project>chem_grid</project>
  <time>1352300400</time>
  <body>Scheduler request completed: got 2 new tasks</body>
</msg>
<msg>
  <body>Resuming computation</body>
</msg>
</msgs>
</boinc_gui_rpc_reply>"#;

const DISPLAY_FIELDS: [&str; 5] = [
    "fraction_done",
    "current_cpu_time",
    "estimated_cpu_time_remaining",
    "active_task_state",
    "exit_status",
];

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LoggerConfig {
        level: LoggerLevel::new("debug")?,
        ..Default::default()
    };
    init_logger(&cfg)?;
    info!("logger initialized");

    // 2) grid configuration
    let grid = GridConfig::default();
    info!(
        "{} v{} attached to {}",
        grid.app_name,
        grid.version_string(),
        grid.grid_name
    );

    // 3) endpoint + login digest
    let mut endpoint = HostEndpoint::new(grid.default_hostname.clone(), "", "");
    info!("control endpoint: {}", endpoint.render());

    let digest = auth_digest("1662092529", "hunter2");
    endpoint.set_auth_hash(&digest);
    info!("login digest computed: {digest}");

    // 4) reverse resolution + endpoint matching
    let loopback = IpAddr::V4(Ipv4Addr::LOCALHOST);
    let addr = resolve_addr(loopback).await;
    info!(
        "{loopback} reverse-resolves to {:?}; endpoint match: {}",
        addr.hostname(),
        endpoint.matches(&addr)
    );

    // 5) result rows, raw and formatted
    let results = ResultRecord::parse(SAMPLE_RESULTS);
    info!("parsed {} result rows", results.len());
    for result in &results {
        info!("--- {}", result.formatted("name"));
        for field in DISPLAY_FIELDS {
            let rendered = result.formatted(field);
            if !rendered.is_empty() {
                info!("    {field}: {rendered}");
            }
        }
    }

    // 6) client messages
    for msg in records("msg", SAMPLE_MESSAGES, &FieldFilter::none()) {
        info!("{}", render_message(&msg));
    }

    Ok(())
}
