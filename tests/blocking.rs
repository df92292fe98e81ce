#![cfg(feature = "blocking")]

use mockito::Matcher;
use rs_qcloud_clb::blocking::Client;
use rs_qcloud_clb::{BackendRequest, ClientConfig, Credential};

fn test_credential() -> Credential {
    Credential {
        secret_id: "test-secret-id".into(),
        secret_key: "test-secret-key".into(),
    }
}

fn test_client(server_url: String) -> Client {
    let config = ClientConfig::default().with_endpoint(format!("{}/v2/index.php", server_url));
    Client::with_config(test_credential(), config).expect("failed to build client")
}

fn path() -> Matcher {
    Matcher::Regex(r"^/v2/index\.php".into())
}

#[test]
fn blocking_describe_success() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", path())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("Action".into(), "DescribeForwardLBBackends".into()),
            Matcher::UrlEncoded("loadBalancerId".into(), "lb-abc123".into()),
            Matcher::UrlEncoded("SecretId".into(), "test-secret-id".into()),
        ]))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"code":0,"data":[]}"#)
        .create();

    let client = test_client(server.url());

    let body = client
        .describe_forward_lb_backends("lb-abc123")
        .expect("describe should succeed");

    assert_eq!(body, r#"{"code":0,"data":[]}"#);
    mock.assert();
}

#[test]
fn blocking_deregister_fourth_error_body_returned() {
    let mut server = mockito::Server::new();

    let error_body = r#"{"code":4000,"message":"listener not found","codeDesc":"InvalidParameter"}"#;
    let mock = server
        .mock("GET", path())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "Action".into(),
                "DeregisterInstancesFromForwardLBFourthListener".into(),
            ),
            Matcher::UrlEncoded("backends.1.weight".into(), "0".into()),
        ]))
        .with_status(400)
        .with_body(error_body)
        .create();

    let client = test_client(server.url());
    let request = BackendRequest::builder()
        .load_balancer_id("lb-abc123")
        .listener_id("lbl-missing")
        .instance_id("ins-001")
        .port(80)
        .weight(0)
        .build();

    let body = client
        .deregister_instances_from_forward_lb_fourth_listener(request)
        .expect("remote rejection is returned as a body");

    assert_eq!(body, error_body);
    mock.assert();
}

#[test]
fn blocking_modify_seventh_port() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", path())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("Action".into(), "ModifyForwardSeventhBackendsPort".into()),
            Matcher::UrlEncoded("backends.1.newPort".into(), "8443".into()),
            Matcher::UrlEncoded("domain".into(), "www.example.com".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"code":0}"#)
        .create();

    let client = test_client(server.url());
    let request = BackendRequest::builder()
        .load_balancer_id("lb-abc123")
        .listener_id("lbl-xyz")
        .instance_id("ins-001")
        .port(443)
        .domain("www.example.com")
        .build();

    client
        .modify_forward_seventh_backends_port(request, 8443)
        .expect("port change should succeed");

    mock.assert();
}
