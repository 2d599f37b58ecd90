use clap::ValueEnum;
use rand::distributions::{Uniform, WeightedError, WeightedIndex};
use rand::Rng;
use rand_distr::{Normal, NormalError};
use thiserror::Error;

/// How the endpoints of random edges are drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, ValueEnum)]
pub enum Distribution {
    /// Every vertex is equally likely.
    #[default]
    Uniform,
    /// Vertex `i` has weight `n - i`. Low ids collect most edges.
    Skewed,
    /// Rounded normal distribution centered on the middle id.
    Normal,
}

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("cannot sample from zero vertices")]
    NoVertices,
    #[error("invalid weights")]
    Weighted(#[from] WeightedError),
    #[error("invalid normal distribution")]
    Normal(#[from] NormalError),
}

#[derive(Debug, Clone)]
enum Inner {
    Uniform(Uniform<usize>),
    Skewed(WeightedIndex<usize>),
    Normal(Normal<f64>),
}

/// Draws vertex ids from `0..n` following a [Distribution].
#[derive(Debug, Clone)]
pub struct VertexSampler {
    n: usize,
    inner: Inner,
}

impl VertexSampler {
    pub fn new(distribution: Distribution, n: usize) -> Result<Self, SampleError> {
        if n == 0 {
            return Err(SampleError::NoVertices);
        }
        let inner = match distribution {
            Distribution::Uniform => Inner::Uniform(Uniform::new(0, n)),
            Distribution::Skewed => Inner::Skewed(WeightedIndex::new((0..n).map(|i| n - i))?),
            Distribution::Normal => {
                let max = (n - 1) as f64;
                Inner::Normal(Normal::new(max / 2.0, max / 3.0)?)
            }
        };
        Ok(Self { n, inner })
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }
}

impl rand::distributions::Distribution<usize> for VertexSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match &self.inner {
            Inner::Uniform(uniform) => rng.sample(uniform),
            Inner::Skewed(weighted) => rng.sample(weighted),
            Inner::Normal(normal) => loop {
                let x = rng.sample(normal).round();
                if x >= 0.0 && x < self.n as f64 {
                    break x as usize;
                }
            },
        }
    }
}
