//! Random forest classifier exported from a fitted scikit-learn ensemble

use serde::Deserialize;

use super::{ArtifactError, InferenceError};

/// Child index marking a leaf node
const LEAF: i64 = -1;

/// One fitted decision tree in flat array form.
///
/// Node `i` splits on `feature[i]` at `threshold[i]`; samples with
/// `x[feature] <= threshold` go to `children_left[i]`. Leaves carry
/// per-class weights in `value[i]`.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub n_classes: usize,
    pub trees: Vec<DecisionTree>,
}

impl DecisionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn validate(&self, index: usize, n_features: usize, n_classes: usize) -> Result<(), ArtifactError> {
        let nodes = self.node_count();
        let invalid = |reason: String| ArtifactError::Shape(format!("tree {}: {}", index, reason));

        if nodes == 0 {
            return Err(invalid("no nodes".into()));
        }
        if self.children_right.len() != nodes
            || self.feature.len() != nodes
            || self.threshold.len() != nodes
            || self.value.len() != nodes
        {
            return Err(invalid("node arrays differ in length".into()));
        }

        for node in 0..nodes {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == LEAF || right == LEAF {
                if left != right {
                    return Err(invalid(format!("node {} has a single child", node)));
                }
                if self.value[node].len() != n_classes {
                    return Err(invalid(format!(
                        "leaf {} has {} class weights, expected {}",
                        node,
                        self.value[node].len(),
                        n_classes
                    )));
                }
                continue;
            }

            // Children always sit after their parent, so descent terminates.
            let in_range = |child: i64| child > node as i64 && (child as usize) < nodes;
            if !in_range(left) || !in_range(right) {
                return Err(invalid(format!("node {} has out-of-range children", node)));
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(invalid(format!("node {} splits on feature {}", node, feature)));
            }
        }

        Ok(())
    }

    /// Class probabilities at the leaf reached by `x`
    fn leaf_probabilities(&self, x: &[f64]) -> Vec<f64> {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }

        let weights = &self.value[node];
        let total: f64 = weights.iter().sum();
        if total > 0.0 {
            weights.iter().map(|w| w / total).collect()
        } else {
            vec![0.0; weights.len()]
        }
    }
}

impl RandomForest {
    /// Check the structure once at load so prediction can index freely
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.trees.is_empty() {
            return Err(ArtifactError::Shape("forest has no trees".into()));
        }
        if self.n_classes == 0 {
            return Err(ArtifactError::Shape("forest has no classes".into()));
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(index, self.n_features, self.n_classes)?;
        }
        Ok(())
    }

    /// Averaged class probabilities across all trees
    pub fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if x.len() != self.n_features {
            return Err(InferenceError::FeatureWidth {
                expected: self.n_features,
                actual: x.len(),
            });
        }
        if self.trees.is_empty() {
            return Err(InferenceError::EmptyForest);
        }

        let mut sums = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (sum, p) in sums.iter_mut().zip(tree.leaf_probabilities(x)) {
                *sum += p;
            }
        }

        let n_trees = self.trees.len() as f64;
        Ok(sums.into_iter().map(|s| s / n_trees).collect())
    }

    /// Index of the most probable class; the lowest index wins ties
    pub fn predict(&self, x: &[f64]) -> Result<usize, InferenceError> {
        let proba = self.predict_proba(x)?;
        let mut best = 0;
        for (class, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = class;
            }
        }
        Ok(best)
    }
}
