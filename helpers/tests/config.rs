//! Validation of connection settings. None of these touch the network.

use helpers::{CALLER_HEADER, SERVICE_HEADER, ServiceConfig, get_client};

fn with_host_port(host_port: &str) -> ServiceConfig {
    ServiceConfig {
        host_port: host_port.to_owned(),
        ..ServiceConfig::default()
    }
}

#[test]
fn defaults_are_valid() {
    let config = ServiceConfig::default();
    config.validate().unwrap();
    assert_eq!(config.task_queue, "SimpleWorker");
    assert_eq!(config.target_url().unwrap().as_str(), "http://127.0.0.1:7233/");
}

#[test]
fn accepts_hostnames_and_ipv6() {
    assert_eq!(
        with_host_port("temporal.internal:7933").target_url().unwrap().port(),
        Some(7933)
    );
    with_host_port("[::1]:7233").validate().unwrap();
}

#[test]
fn explicit_default_port_is_kept() {
    let url = with_host_port("127.0.0.1:80").target_url().unwrap();
    assert_eq!(url.port_or_known_default(), Some(80));
}

#[test]
fn rejects_malformed_host_port() {
    for bad in [
        "127.0.0.1",
        "127.0.0.1:",
        ":7233",
        "127.0.0.1:port",
        "127.0.0.1:70000",
        "http://127.0.0.1:7233",
        "127.0.0.1:7233/extra",
        "a:b:7233",
        "127.0.0.1#x:7233",
        "127.0.0.1?x:7233",
        "evil@127.0.0.1:7233",
        "user:pass@127.0.0.1:7233",
        "127.0.0.1\\x:7233",
    ] {
        assert!(with_host_port(bad).validate().is_err(), "accepted {bad:?}");
    }
}

#[test]
fn rejects_empty_fields() {
    let blanks = [
        ServiceConfig { namespace: String::new(), ..ServiceConfig::default() },
        ServiceConfig { host_port: "  ".into(), ..ServiceConfig::default() },
        ServiceConfig { task_queue: String::new(), ..ServiceConfig::default() },
        ServiceConfig { client_name: String::new(), ..ServiceConfig::default() },
        ServiceConfig { service_name: String::new(), ..ServiceConfig::default() },
    ];
    for config in blanks {
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not be empty"), "{err}");
    }
}

#[test]
fn headers_name_caller_and_service() {
    let config = ServiceConfig {
        client_name: "cadence-client".into(),
        service_name: "cadence-frontend".into(),
        ..ServiceConfig::default()
    };
    let headers = config.rpc_headers();
    assert_eq!(headers.len(), 2);
    assert_eq!(headers[CALLER_HEADER], "cadence-client");
    assert_eq!(headers[SERVICE_HEADER], "cadence-frontend");
}

#[tokio::test]
async fn get_client_fails_fast_on_bad_config() {
    let err = get_client(&with_host_port("no-port-here")).await.unwrap_err();
    assert!(
        format!("{err:#}").contains("invalid service configuration"),
        "{err:#}"
    );
}
