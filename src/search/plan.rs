//! A plan is a sequence of joint actions that can be executed to achieve a
//! goal. This module provides the [`Plan`] struct, which represents a plan.

use crate::search::JointAction;
use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<JointAction<A>>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<JointAction<A>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[JointAction<A>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<A> Default for Plan<A> {
    fn default() -> Self {
        Self::empty()
    }
}

/// One joint action per line, the actions of the agents separated by `|`.
impl<A> fmt::Display for Plan<A>
where
    A: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, joint_action) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (agent, action) in joint_action.iter().enumerate() {
                if agent > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", action)?;
            }
        }
        Ok(())
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = JointAction<A>;
    type IntoIter = std::vec::IntoIter<JointAction<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [JointAction<A>];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
