/// Buffers of one shell-pair evaluation. Everything is sized from the total angular momentum
/// when a call starts; nothing carries meaning from one call to the next.
#[derive(Debug, Default)]
pub(crate) struct Workspace {
    /// Boys values of the current primitive pair
    pub(crate) boys: Vec<f64>,
    /// Screened seed integrals of the current primitive pair
    pub(crate) seeds: Vec<f64>,
    /// Seed integrals summed over all primitive pairs, one slot per order
    pub(crate) base: Vec<f64>,
    /// Recurrence table of the angular-momentum expander
    pub(crate) scratch: Vec<f64>,
}

impl Workspace {
    /// Resets the buffers for a call with total angular momentum `am`.
    pub(crate) fn acquire(&mut self, am: usize) {
        for buffer in [&mut self.boys, &mut self.seeds, &mut self.base] {
            buffer.clear();
            buffer.resize(am + 1, 0.0);
        }
        self.scratch.clear();
    }
}
