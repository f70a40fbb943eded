//! Request / Response DTOs
//!
//! 请求体绑定结构，以及实体到 JSON 结构的只读投影（每次请求临时创建）

mod line_request;
mod line_response;
mod station_request;
mod station_response;

pub use line_request::{LineRequest, LineUpdateRequest};
pub use line_response::{LineResponse, LineWithStationResponse};
pub use station_request::StationRequest;
pub use station_response::StationResponse;
