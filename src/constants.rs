/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-kma-weather/0.1.0";

/// KMA village forecast API base URL
pub const KMA_API_BASE: &str = "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0";

/// Current-conditions (ultra-short nowcast) endpoint
pub const CURRENT_OBSERVATION_PATH: &str = "getUltraSrtNcst";

/// Very-short-range forecast endpoint
pub const ULTRA_SHORT_FORECAST_PATH: &str = "getUltraSrtFcst";

/// Short-range (village) forecast endpoint
pub const VILLAGE_FORECAST_PATH: &str = "getVilageFcst";
