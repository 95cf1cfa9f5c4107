//! Representative invocation events for each front door.
//!
//! Used by the local invoke CLI and by tests. The events follow the shapes the
//! AWS services deliver, trimmed to a plausible subset of fields.

use serde_json::{json, Value};

/// A front-door event shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Application Load Balancer target group event.
    Alb,
    /// API Gateway REST API (payload format 1.0).
    RestApi,
    /// API Gateway HTTP API (payload format 2.0).
    HttpApi,
    /// Direct `Invoke` call with a hand-built body.
    Direct,
}

impl Sample {
    pub const ALL: [Sample; 4] = [Sample::Alb, Sample::RestApi, Sample::HttpApi, Sample::Direct];

    pub fn event(self) -> Value {
        match self {
            Sample::Alb => json!({
                "requestContext": {
                    "elb": {
                        "targetGroupArn": "arn:aws:elasticloadbalancing:us-east-1:123456789012:targetgroup/edge-echo/6d0ecf831eec9f09"
                    }
                },
                "httpMethod": "GET",
                "path": "/echo",
                "queryStringParameters": {},
                "headers": {
                    "host": "edge-echo-1234567890.us-east-1.elb.amazonaws.com",
                    "user-agent": "curl/8.5.0",
                    "x-forwarded-for": "203.0.113.10, 10.0.1.25",
                    "x-forwarded-port": "443",
                    "x-forwarded-proto": "https",
                    "x-amzn-trace-id": "Root=1-65f0a1b2-0123456789abcdef01234567"
                },
                "body": "",
                "isBase64Encoded": false
            }),
            Sample::RestApi => json!({
                "resource": "/echo",
                "path": "/echo",
                "httpMethod": "GET",
                "headers": {
                    "Host": "abc123defg.execute-api.us-east-1.amazonaws.com",
                    "X-Forwarded-For": "198.51.100.7",
                    "X-Forwarded-Port": "443",
                    "X-Forwarded-Proto": "https",
                    "X-Amzn-Trace-Id": "Root=1-65f0a1b3-89abcdef0123456789abcdef"
                },
                "requestContext": {
                    "apiId": "abc123defg",
                    "stage": "prod",
                    "httpMethod": "GET",
                    "identity": { "sourceIp": "198.51.100.7" }
                },
                "body": null,
                "isBase64Encoded": false
            }),
            Sample::HttpApi => json!({
                "version": "2.0",
                "routeKey": "ANY /echo",
                "rawPath": "/echo",
                "rawQueryString": "",
                "headers": {
                    "host": "xyz789hijk.execute-api.eu-west-1.amazonaws.com",
                    "x-forwarded-for": "192.0.2.44",
                    "x-forwarded-port": "443",
                    "x-forwarded-proto": "https",
                    "x-amzn-trace-id": "Root=1-65f0a1b4-fedcba9876543210fedcba98"
                },
                "requestContext": {
                    "apiId": "xyz789hijk",
                    "stage": "$default",
                    "http": {
                        "method": "POST",
                        "path": "/echo",
                        "protocol": "HTTP/1.1",
                        "sourceIp": "192.0.2.44",
                        "userAgent": "curl/8.5.0"
                    }
                },
                "isBase64Encoded": false
            }),
            Sample::Direct => json!({
                "rawPath": "/diagnostics",
                "headers": {
                    "x-forwarded-for": "192.0.2.99"
                }
            }),
        }
    }
}
