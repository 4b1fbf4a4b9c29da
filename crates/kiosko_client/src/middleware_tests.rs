//! Unit tests for the middleware chain.

use std::sync::Arc;

use url::Url;

use super::{Middleware, RequestBag, TokenMiddleware, TokenProvider, TOKEN_PARAM};
use crate::endpoint::endpoints;

struct StaticToken(Option<&'static str>);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

fn bag() -> RequestBag {
    RequestBag {
        url: Url::parse("https://api.kiosko.test/campaigns").expect("valid test url"),
        query: Vec::new(),
        body: None,
    }
}

#[test]
fn attaches_token_when_endpoint_requires_it() {
    let middleware = TokenMiddleware::new(Arc::new(StaticToken(Some("abc123"))));

    let out = middleware.handle(bag(), &endpoints::CAMPAIGN_LIST);

    assert_eq!(
        out.query,
        vec![(TOKEN_PARAM.to_string(), "abc123".to_string())]
    );
}

#[test]
fn never_attaches_token_to_public_endpoints() {
    let middleware = TokenMiddleware::new(Arc::new(StaticToken(Some("abc123"))));

    let out = middleware.handle(bag(), &endpoints::LOGIN);

    assert!(out.query.is_empty());
}

#[test]
fn missing_token_leaves_request_untouched() {
    let middleware = TokenMiddleware::new(Arc::new(StaticToken(None)));

    let out = middleware.handle(bag(), &endpoints::CAMPAIGN_LIST);

    assert!(out.query.is_empty());
}

#[test]
fn existing_query_parameters_are_preserved() {
    let middleware = TokenMiddleware::new(Arc::new(StaticToken(Some("abc123"))));
    let mut input = bag();
    input
        .query
        .push(("page".to_string(), "2".to_string()));

    let out = middleware.handle(input, &endpoints::CAMPAIGN_LIST);

    assert_eq!(out.query[0], ("page".to_string(), "2".to_string()));
    assert_eq!(out.query[1], (TOKEN_PARAM.to_string(), "abc123".to_string()));
}
