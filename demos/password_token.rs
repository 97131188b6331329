//! Demonstrates authenticating against a mocked Identity v2 endpoint with the default reqwest
//! transport, then reading the token and locating a service endpoint.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use openstack_identity_v2::{
	auth::AuthOptions,
	client::IdentityClient,
	http::ReqwestHttpClient,
	reqwest::Client,
	tokens::EndpointOpts,
	url::Url,
};

const RESPONSE: &str = r#"{
  "access": {
    "token": {
      "expires": "2030-01-31T15:30:58Z",
      "id": "demo-token",
      "tenant": { "id": "t-demo", "name": "demo", "description": "", "enabled": true }
    },
    "serviceCatalog": [
      {
        "name": "nova",
        "type": "compute",
        "endpoints": [{ "publicURL": "http://compute.local:8774/v2/t-demo", "region": "RegionOne" }]
      }
    ]
  }
}"#;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2.0/tokens");
			then.status(200).header("content-type", "application/json").body(RESPONSE);
		})
		.await;
	let options = AuthOptions::password("demo-user", "demo-password")
		.with_tenant_name("demo")
		.with_identity_endpoint(Url::parse(&server.url("/v2.0"))?);
	let http_client = ReqwestHttpClient::with_client(Client::builder().no_proxy().build()?);
	let client = <IdentityClient<ReqwestHttpClient>>::for_options(&options, http_client)?;
	let result = client.create(&options).await;
	let token = result.extract_token()?;
	let compute = result.extract_service_catalog()?.locate(&EndpointOpts::new("compute"))?;

	println!("Token for tenant {} expires at {}.", token.tenant.name, token.expires_at);
	println!("Compute endpoint: {compute}.");

	token_mock.assert_async().await;

	Ok(())
}
