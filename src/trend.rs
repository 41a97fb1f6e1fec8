//! Least-squares trend over the readings in a snapshot.
//!
//! x is the 0-based position in the snapshot, not wall-clock time. Nothing is
//! cached: every call fits from scratch.

/// Best-fit line `value = slope * index + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination. `None` when all values are equal.
    pub r_squared: Option<f64>,
}

impl TrendLine {
    pub fn value_at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }

    /// Fitted value for each of the first `len` indices.
    pub fn fitted(&self, len: usize) -> Vec<f64> {
        (0..len).map(|i| self.value_at(i)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trend {
    /// Fewer than two points; there is no line to draw.
    Insufficient,
    Line(TrendLine),
}

impl Trend {
    pub fn fit(values: &[f64]) -> Self {
        if values.len() < 2 {
            return Trend::Insufficient;
        }

        let first = values[0];
        if values.iter().all(|&v| v == first) {
            return Trend::Line(TrendLine {
                slope: 0.0,
                intercept: first,
                r_squared: None,
            });
        }

        let n = values.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n;

        let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            let dy = y - mean_y;
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }

        // sxx > 0 whenever there are two or more indices.
        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        let r_squared = (syy > 0.0).then(|| (sxy * sxy) / (sxx * syy));

        Trend::Line(TrendLine {
            slope,
            intercept,
            r_squared,
        })
    }

    pub fn line(&self) -> Option<&TrendLine> {
        match self {
            Trend::Line(line) => Some(line),
            Trend::Insufficient => None,
        }
    }
}
