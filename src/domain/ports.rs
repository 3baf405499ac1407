/// Raw, unvalidated copy settings from one configuration source.
///
/// Offset and limit stay signed here so negative input reaches validation
/// instead of failing at parse time.
pub trait ConfigProvider {
    fn from_path(&self) -> Option<&str>;
    fn to_path(&self) -> Option<&str>;
    fn offset(&self) -> Option<i64>;
    fn limit(&self) -> Option<i64>;
}
