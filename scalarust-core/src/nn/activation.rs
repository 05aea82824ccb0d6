use crate::error::ScalarustError;
use crate::scalar::Scalar;
use std::fmt;
use std::str::FromStr;

/// Activation applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    /// Identity.
    Linear,
    Tanh,
    Relu,
    #[default]
    Gelu,
}

impl Activation {
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Gelu => "gelu",
        }
    }

    /// Applies the activation through the engine. `Linear` returns `x`
    /// itself and adds no node.
    pub fn apply<'g>(self, x: Scalar<'g>) -> Scalar<'g> {
        match self {
            Activation::Linear => x,
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
            Activation::Gelu => x.gelu(),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Activation::Linear),
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "gelu" => Ok(Activation::Gelu),
            _ => Err(ScalarustError::UnknownActivation(s.to_string())),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
