use crate::domain::ports::Doubler;

/// Stateless doubling helper.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlgoService;

impl Doubler for AlgoService {
    fn double(&self, value: i64) -> Option<i64> {
        value.checked_mul(2)
    }
}
