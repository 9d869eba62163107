use serde::{Deserialize, Serialize};

use crate::envelope::{nested_response, Envelope};

/// Plan and usage of the account owning the API key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    #[serde(skip)]
    envelope: Envelope,

    pub plan: String,

    pub concurrent_request_limit: i64,

    pub concurrent_requests_used: i64,

    // Documented as `planDailyIncludedRequests`, sent as `planDailyRequestsIncluded`.
    #[serde(rename = "planDailyRequestsIncluded")]
    pub plan_daily_included_requests: i64,

    pub requests_used_today: i64,
}

nested_response!(Account);
