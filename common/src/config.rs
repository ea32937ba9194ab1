#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the banner even when `verbose` would show it.
    pub no_banner: bool,
    /// `0` prints only the tour lines, `1` adds a closing summary line, `2`
    /// frames the tour with the banner, section headers and a separator.
    pub verbose: u8,
    /// Disables ANSI colours in headers and log prefixes.
    pub no_color: bool,
}
