//! Loaded observation columns for the regression pipeline

/// Two observation columns loaded from text files
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Dataset {
    /// Number of observations in the x column
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Min/max of the x column, None when empty
    pub fn x_range(&self) -> Option<(f64, f64)> {
        column_range(&self.x)
    }

    /// Min/max of the y column, None when empty
    pub fn y_range(&self) -> Option<(f64, f64)> {
        column_range(&self.y)
    }
}

fn column_range(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_ranges() {
        let dataset = Dataset {
            x: vec![3.0, -1.0, 2.0],
            y: vec![10.0, 20.0, 15.0],
        };
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.x_range(), Some((-1.0, 3.0)));
        assert_eq!(dataset.y_range(), Some((10.0, 20.0)));
    }

    #[test]
    fn test_empty_dataset_has_no_range() {
        let dataset = Dataset { x: vec![], y: vec![] };
        assert!(dataset.is_empty());
        assert_eq!(dataset.x_range(), None);
    }
}
