/// Declares a role's nominal capacity and cost rate. The simulator never
/// enforces capacity; it only feeds the utilization statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub role: String,
    pub capacity: f32,
    pub hourly_rate: f32,
}
