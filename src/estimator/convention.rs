use clap::ValueEnum;

/// Scale of the Erlang C and Gunther columns. Sakasegawa has a single,
/// unscaled form and is never rescaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum Convention {
    /// Queue length as the formulas produce it.
    #[default]
    Plain,
    /// Queue length multiplied by the offered load `u·m`.
    Scaled,
}

impl Convention {
    pub fn apply(self, value: f64, offered_load: f64) -> f64 {
        match self {
            Convention::Plain => value,
            Convention::Scaled => offered_load * value,
        }
    }
}
