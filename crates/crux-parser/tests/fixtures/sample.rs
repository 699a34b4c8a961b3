//! A small service crate used as an extraction fixture.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_PORT: u16 = 8080;
static GREETING: &str = "hello";

/// Runtime configuration for the service.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub name: String,
    pub port: u16,
    pub(crate) retries: u32,
    labels: HashMap<String, String>,
}

/// Errors raised while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Missing { key: String },
    Invalid = 3,
}

pub type Labels<'a> = &'a HashMap<String, String>;

pub trait Handler {
    type Output;

    fn handle(&self, input: &str) -> Self::Output;

    fn name(&self) -> &str {
        "handler"
    }
}

impl Config {
    /// Build a config listening on `port`.
    pub fn new(name: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            port,
            ..Self::default()
        }
    }

    fn label(&self, key: &str) -> Option<&String> {
        self.labels.get(key)
    }

    pub fn set_retries(&mut self, retries: u32) {
        self.retries = retries;
    }
}

impl Handler for Config {
    type Output = String;

    fn handle(&self, input: &str) -> String {
        format!("{}:{} {input}", self.name, self.port)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

pub mod net;

mod storage;

pub mod geometry {
    /// A point in the plane.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
    }

    pub fn origin() -> Point {
        Point { x: 0.0, y: 0.0 }
    }

    pub mod shapes {
        use super::Point;

        pub struct Circle {
            pub center: Point,
            pub radius: f64,
        }

        pub(super) fn unit() -> Circle {
            Circle {
                center: super::origin(),
                radius: 1.0,
            }
        }
    }

    mod internal {
        pub fn scale(value: f64) -> f64 {
            value * 2.0
        }
    }
}

pub fn load(path: &str) -> Result<Config, ConfigError> {
    ensure!(!path.is_empty(), ConfigError::Missing { key: "path".into() });
    Ok(Config::new(path, DEFAULT_PORT))
}

fn helper<T: fmt::Debug>(value: T) -> String {
    format!("{value:?}")
}
