/// Frontier-based simulation of a finite-state machine.
pub trait Simulate {
    /// Returns whether the machine accepts the input consumed so far.
    fn is_accepting(&self) -> bool;

    /// Feeds a single character to the machine and returns whether it has
    /// reached an accepting state.
    fn feed(&mut self, input: char) -> bool;

    /// Feeds the entire input to the machine and returns the per-prefix
    /// verdict string: one `Y` or `N` per consumed character. The verdict for
    /// a prefix is produced before the next character is consumed, so empty
    /// input yields an empty string.
    fn trace(&mut self, input: &str) -> String {
        input
            .chars()
            .map(|c| if self.feed(c) { 'Y' } else { 'N' })
            .collect()
    }

    /// Simulates the machine from start to finish and returns whether it
    /// accepts the input.
    fn run(mut self, input: &str) -> bool
    where
        Self: Sized,
    {
        let accept = self.is_accepting();
        input.chars().map(|c| self.feed(c)).last().unwrap_or(accept)
    }
}
