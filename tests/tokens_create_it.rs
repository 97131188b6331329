// crates.io
use httpmock::prelude::*;
use serde_json::{Value, json};
use time::macros;
// self
use openstack_identity_v2::{
	_preludet::*,
	auth::AuthOptions,
	error::{AuthOptionsError, Error},
	tenants::Tenant,
	tokens::{CatalogEntry, CreateResult, Endpoint, ServiceCatalog},
};

fn expected_tenant() -> Tenant {
	Tenant {
		id: "fc394f2ab2df4114bde39905f800dc57".into(),
		name: "test".into(),
		description: "There are many tenants. This one is yours.".into(),
		enabled: true,
	}
}

fn endpoint(public_url: &str, region: &str) -> Endpoint {
	Endpoint { public_url: public_url.into(), region: region.into(), ..Default::default() }
}

fn expected_catalog() -> ServiceCatalog {
	ServiceCatalog {
		entries: vec![
			CatalogEntry {
				name: "inscrutablewalrus".into(),
				service_type: "something".into(),
				endpoints: vec![
					endpoint("http://something0:1234/v2/", "region0"),
					endpoint("http://something1:1234/v2/", "region1"),
				],
			},
			CatalogEntry {
				name: "arbitrarypenguin".into(),
				service_type: "else".into(),
				endpoints: vec![endpoint("http://else0:4321/v3/", "region0")],
			},
		],
	}
}

async fn token_post(options: AuthOptions, request_json: Value) -> CreateResult {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tokens")
				.header("content-type", "application/json")
				.header("accept", "application/json")
				.json_body(request_json);
			then.status(200)
				.header("content-type", "application/json")
				.body(TOKEN_RESPONSE_FIXTURE);
		})
		.await;
	let client = build_reqwest_test_client(&server.url("/"));
	let result = client.create(&options).await;

	mock.assert_async().await;

	result
}

async fn token_post_err(options: AuthOptions, expected: AuthOptionsError) {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/tokens");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;
	let client = build_reqwest_test_client(&server.url("/"));
	let result = client.create(&options).await;

	match result.err() {
		Some(Error::Options(actual)) => assert_eq!(*actual, expected),
		other => panic!("Unexpected stored error: {other:?}."),
	}

	mock.assert_calls_async(0).await;
}

fn assert_successful(result: &CreateResult) {
	let token = result.extract_token().expect("Token extraction should succeed.");

	assert_eq!(token.id.expose(), "aaaabbbbccccdddd");
	assert_eq!(token.expires_at, macros::datetime!(2014-01-31 15:30:58 UTC));
	assert_eq!(token.tenant, expected_tenant());

	let catalog =
		result.extract_service_catalog().expect("Service catalog extraction should succeed.");

	assert_eq!(catalog, expected_catalog());
}

#[tokio::test]
async fn create_with_password() {
	let result = token_post(
		AuthOptions::password("me", "swordfish"),
		json!({
			"auth": {
				"passwordCredentials": { "username": "me", "password": "swordfish" }
			}
		}),
	)
	.await;

	assert_successful(&result);
}

#[tokio::test]
async fn create_token_with_tenant_id() {
	let result = token_post(
		AuthOptions::password("me", "opensesame")
			.with_tenant_id("fc394f2ab2df4114bde39905f800dc57"),
		json!({
			"auth": {
				"tenantId": "fc394f2ab2df4114bde39905f800dc57",
				"passwordCredentials": { "username": "me", "password": "opensesame" }
			}
		}),
	)
	.await;

	assert_successful(&result);
}

#[tokio::test]
async fn create_token_with_tenant_name() {
	let result = token_post(
		AuthOptions::password("me", "opensesame").with_tenant_name("demo"),
		json!({
			"auth": {
				"tenantName": "demo",
				"passwordCredentials": { "username": "me", "password": "opensesame" }
			}
		}),
	)
	.await;

	assert_successful(&result);
}

#[tokio::test]
async fn extraction_repeats_identically() {
	let result = token_post(
		AuthOptions::password("me", "swordfish"),
		json!({
			"auth": {
				"passwordCredentials": { "username": "me", "password": "swordfish" }
			}
		}),
	)
	.await;

	assert_eq!(
		result.extract_token().expect("First token extraction should succeed."),
		result.extract_token().expect("Second token extraction should succeed.")
	);
	assert_eq!(
		result.extract_service_catalog().expect("First catalog extraction should succeed."),
		result.extract_service_catalog().expect("Second catalog extraction should succeed.")
	);
}

#[tokio::test]
async fn prohibit_user_id() {
	token_post_err(
		AuthOptions::password("me", "thing").with_user_id("1234"),
		AuthOptionsError::UserIdProvided,
	)
	.await;
}

#[tokio::test]
async fn prohibit_api_key() {
	token_post_err(
		AuthOptions::password("me", "thing").with_api_key("123412341234"),
		AuthOptionsError::ApiKeyProvided,
	)
	.await;
}

#[tokio::test]
async fn prohibit_domain_id() {
	token_post_err(
		AuthOptions::password("me", "thing").with_domain_id("1234"),
		AuthOptionsError::DomainIdProvided,
	)
	.await;
}

#[tokio::test]
async fn prohibit_domain_name() {
	token_post_err(
		AuthOptions::password("me", "thing").with_domain_name("wat"),
		AuthOptionsError::DomainNameProvided,
	)
	.await;
}

#[tokio::test]
async fn require_username() {
	token_post_err(
		AuthOptions::default().with_password("thing"),
		AuthOptionsError::UsernameRequired,
	)
	.await;
}

#[tokio::test]
async fn require_password() {
	token_post_err(AuthOptions::default().with_username("me"), AuthOptionsError::PasswordRequired)
		.await;
}

#[tokio::test]
async fn unauthorized_status_is_stored() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/tokens");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"error\":{\"code\":401,\"title\":\"Unauthorized\"}}");
		})
		.await;
	let client = build_reqwest_test_client(&server.url("/"));
	let result = client.create(&AuthOptions::password("me", "wrong")).await;

	match result.extract_token() {
		Err(Error::UnexpectedStatus { status, body }) => {
			assert_eq!(status, 401);
			assert!(body.contains("Unauthorized"));
		},
		other => panic!("Unexpected extraction outcome: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/tokens");
			then.status(200).header("content-type", "text/html").body("<html></html>");
		})
		.await;
	let client = build_reqwest_test_client(&server.url("/"));
	let result = client.create(&AuthOptions::password("me", "swordfish")).await;

	assert!(matches!(result.extract_token(), Err(Error::Decode(_))));
	assert!(matches!(result.extract_service_catalog(), Err(Error::Decode(_))));

	mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
	let client = build_reqwest_test_client("http://127.0.0.1:1/");
	let result = client.create(&AuthOptions::password("me", "swordfish")).await;

	assert!(matches!(result.err(), Some(Error::Transport(_))));
	assert!(matches!(result.extract_token(), Err(Error::Transport(_))));
}
