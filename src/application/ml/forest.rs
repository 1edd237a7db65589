use crate::domain::errors::TrainingError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::{
    DecisionTreeClassifier, DecisionTreeClassifierParameters, SplitCriterion,
};
use tracing::debug;

type Tree = DecisionTreeClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;

/// Probabilities for classes `[0, 1]`; index 1 is success.
pub type ClassProbabilities = [f64; 2];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForestParameters {
    pub n_trees: usize,
    pub max_depth: Option<u16>,
    pub min_samples_split: usize,
    pub seed: u64,
}

impl Default for ForestParameters {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            seed: 42,
        }
    }
}

/// Bagged ensemble of decision trees.
///
/// Every tree is fitted on its own bootstrap sample; the positive-class probability is
/// the fraction of trees voting for class 1. A smartcore tree reports one-hot leaf
/// probabilities, so this equals the mean of the per-tree `predict_proba` outputs.
#[derive(Serialize, Deserialize)]
pub struct BaggedForest {
    trees: Vec<Tree>,
}

impl BaggedForest {
    pub fn fit(
        rows: &[Vec<f64>],
        labels: &[i32],
        params: &ForestParameters,
    ) -> Result<Self, TrainingError> {
        if rows.is_empty() || rows.len() != labels.len() {
            return Err(TrainingError::InvalidConfig {
                reason: format!("{} rows for {} labels", rows.len(), labels.len()),
            });
        }
        if params.n_trees == 0 {
            return Err(TrainingError::InvalidConfig {
                reason: "forest needs at least one tree".to_string(),
            });
        }

        // Each tree owns a seed derived from its index, so the fitted forest does not
        // depend on how rayon schedules the work.
        let trees = (0..params.n_trees)
            .into_par_iter()
            .map(|tree_index| fit_tree(rows, labels, params, tree_index))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Fitted {} trees on {} rows", trees.len(), rows.len());
        Ok(Self { trees })
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn predict_proba(&self, rows: &[Vec<f64>]) -> Result<Vec<ClassProbabilities>, String> {
        if self.trees.is_empty() {
            return Err("Forest has no trees".to_string());
        }

        let matrix =
            DenseMatrix::from_2d_vec(&rows.to_vec()).map_err(|e| format!("Matrix error: {}", e))?;

        let mut positive_votes = vec![0usize; rows.len()];
        for tree in &self.trees {
            let predictions = tree
                .predict(&matrix)
                .map_err(|e| format!("Prediction failed: {}", e))?;
            for (votes, class) in positive_votes.iter_mut().zip(predictions.iter()) {
                if *class == 1 {
                    *votes += 1;
                }
            }
        }

        let n_trees = self.trees.len() as f64;
        Ok(positive_votes
            .into_iter()
            .map(|votes| {
                let p = votes as f64 / n_trees;
                [1.0 - p, p]
            })
            .collect())
    }

    /// Class 1 when its probability is strictly above one half.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<i32>, String> {
        Ok(self
            .predict_proba(rows)?
            .into_iter()
            .map(|[_, p]| i32::from(p > 0.5))
            .collect())
    }
}

fn fit_tree(
    rows: &[Vec<f64>],
    labels: &[i32],
    params: &ForestParameters,
    tree_index: usize,
) -> Result<Tree, TrainingError> {
    let tree_seed = params.seed.wrapping_add(tree_index as u64);
    let mut rng = StdRng::seed_from_u64(tree_seed);

    let n = rows.len();
    let mut sample_rows = Vec::with_capacity(n);
    let mut sample_labels = Vec::with_capacity(n);
    for _ in 0..n {
        let idx = rng.random_range(0..n);
        sample_rows.push(rows[idx].clone());
        sample_labels.push(labels[idx]);
    }

    let x = DenseMatrix::from_2d_vec(&sample_rows).map_err(|e| TrainingError::Matrix {
        reason: e.to_string(),
    })?;

    let mut tree_params = DecisionTreeClassifierParameters::default()
        .with_criterion(SplitCriterion::Gini)
        .with_min_samples_split(params.min_samples_split);
    if let Some(depth) = params.max_depth {
        tree_params = tree_params.with_max_depth(depth);
    }
    tree_params.seed = Some(tree_seed);

    DecisionTreeClassifier::fit(&x, &sample_labels, tree_params).map_err(|e| TrainingError::Fit {
        tree: tree_index,
        reason: e.to_string(),
    })
}
