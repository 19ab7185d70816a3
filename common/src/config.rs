pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `1` hides headers, `2` prints bare results only.
    pub quiet: u8,
    /// Disables ANSI colours in every line the tool prints.
    pub no_color: bool,
}
