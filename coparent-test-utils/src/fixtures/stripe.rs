//! Stripe REST API HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};

use crate::{constant::TEST_STRIPE_SECRET_KEY, TestContext};

impl TestContext {
    pub fn stripe(&mut self) -> StripeFixtures<'_> {
        StripeFixtures { setup: self }
    }
}

pub struct StripeFixtures<'a> {
    setup: &'a mut TestContext,
}

fn authorization() -> Matcher {
    Matcher::Exact(format!("Bearer {}", TEST_STRIPE_SECRET_KEY))
}

impl<'a> StripeFixtures<'a> {
    /// GET `/v1/customers` search returning `customer_id` or an empty list
    pub fn create_customer_search_endpoint(
        &mut self,
        customer_id: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let data: Vec<serde_json::Value> = customer_id
            .map(|id| serde_json::json!({ "id": id, "object": "customer" }))
            .into_iter()
            .collect();
        let body = serde_json::json!({ "object": "list", "data": data, "has_more": false });

        self.setup
            .server
            .mock("GET", "/v1/customers")
            .match_query(Matcher::Any)
            .match_header("authorization", authorization())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// POST `/v1/customers` returning a new customer with `customer_id`
    pub fn create_customer_endpoint(&mut self, customer_id: &str, expected_requests: usize) -> Mock {
        let body = serde_json::json!({ "id": customer_id, "object": "customer" });

        self.setup
            .server
            .mock("POST", "/v1/customers")
            .match_header("authorization", authorization())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// POST `/v1/checkout/sessions` returning a hosted checkout at `url`
    pub fn create_checkout_endpoint(&mut self, url: &str, expected_requests: usize) -> Mock {
        let body =
            serde_json::json!({ "id": "cs_test_1", "object": "checkout.session", "url": url });

        self.setup
            .server
            .mock("POST", "/v1/checkout/sessions")
            .match_header("authorization", authorization())
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("mode".into(), "subscription".into()),
                Matcher::UrlEncoded("line_items[0][quantity]".into(), "1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// POST `/v1/billing_portal/sessions` returning a portal session at `url`
    pub fn create_billing_portal_endpoint(
        &mut self,
        url: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({
            "id": "bps_test_1",
            "object": "billing_portal.session",
            "url": url,
        });

        self.setup
            .server
            .mock("POST", "/v1/billing_portal/sessions")
            .match_header("authorization", authorization())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Any Stripe endpoint answering with an API error body and `status`
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({
            "error": {
                "type": "invalid_request_error",
                "message": "Mock Stripe error",
            }
        });

        self.setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
