use std::{
    fmt::Display,
    mem,
    ops::{
        Add,
        Div,
        Mul,
    },
};

/// A calculated value, together with a record of every operation that produced it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output<T> {
    value: T,
    description: Vec<String>,
}

impl<T> Output<T>
where
    T: Default,
{
    /// Starts the output from an initial value.
    pub fn start<V, S>(val: V, reason: S) -> Self
    where
        V: Display + Into<T>,
        S: Display,
    {
        let description = vec![format!("={val} - {reason}")];
        Self {
            value: val.into(),
            description,
        }
    }

    /// Splits the output into its value and description.
    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.value, self.description)
    }

    fn apply<F>(&mut self, f: F, entry: String)
    where
        F: FnOnce(T) -> T,
    {
        let value = mem::take(&mut self.value);
        self.value = f(value);
        self.description.push(entry);
    }

    /// Adds to the value.
    pub fn add<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Display,
        S: Display,
        T: Add<V, Output = T>,
    {
        let entry = format!("+{rhs} - {reason}");
        self.apply(|val| val + rhs, entry);
    }

    /// Multiplies the value.
    pub fn mul<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Display,
        S: Display,
        T: Mul<V, Output = T>,
    {
        let entry = format!("x{rhs} - {reason}");
        self.apply(|val| val * rhs, entry);
    }

    /// Divides the value.
    pub fn div<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Display,
        S: Display,
        T: Div<V, Output = T>,
    {
        let entry = format!("\u{00F7}{rhs} - {reason}");
        self.apply(|val| val / rhs, entry);
    }

    /// Maps to a value of another type.
    pub fn map<F, M, S>(mut self, f: F, reason: S) -> Output<M>
    where
        F: FnOnce(T) -> M,
        S: Display,
    {
        let value = f(self.value);
        self.description.push(format!("[mapped] - {reason}"));
        Output {
            value,
            description: self.description,
        }
    }
}
