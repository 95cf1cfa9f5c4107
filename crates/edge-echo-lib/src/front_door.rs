//! Detection of the service that forwarded the request.

use std::fmt;

use crate::event::{is_truthy, InvocationEvent};

/// Entry-point service that invoked the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontDoor {
    /// Application Load Balancer target.
    LoadBalancer,
    /// API Gateway (REST or HTTP API).
    ApiGateway,
    /// Direct invoke or function URL.
    Direct,
}

impl FrontDoor {
    /// Classify an event.
    ///
    /// The load balancer marker is checked by key presence only and wins over
    /// any API Gateway markers on the same context.
    pub fn detect(event: &InvocationEvent) -> Self {
        let Some(ctx) = event.request_context.as_ref() else {
            return FrontDoor::Direct;
        };

        if ctx.elb.is_some() {
            FrontDoor::LoadBalancer
        } else if ctx.api_id.as_ref().is_some_and(is_truthy)
            || ctx.stage.as_ref().is_some_and(is_truthy)
        {
            FrontDoor::ApiGateway
        } else {
            FrontDoor::Direct
        }
    }

    /// Human-readable path description reported in the payload.
    pub fn via(self) -> &'static str {
        match self {
            FrontDoor::LoadBalancer => "ALB → Lambda",
            FrontDoor::ApiGateway => "API Gateway → Lambda",
            FrontDoor::Direct => "Direct/Function URL → Lambda",
        }
    }

    /// Short identifier used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            FrontDoor::LoadBalancer => "alb",
            FrontDoor::ApiGateway => "api-gateway",
            FrontDoor::Direct => "direct",
        }
    }
}

impl fmt::Display for FrontDoor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
