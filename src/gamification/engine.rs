use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::gamification::errors::GamificationError;
use crate::gamification::policy::{CompletionRule, ManualCompletion, RewardPolicy};
use crate::gamification::{Challenge, ChallengeId, Goal, GoalId, Notification, Reward};

/// Reacts to (projected) balances by latching goals and handing out rewards.
///
/// The engine owns four ordered sequences: goals, challenges, rewards and
/// notifications. Rewards and notifications only ever grow, except for
/// [`GamificationEngine::clear_notifications`].
pub struct GamificationEngine {
    goals: Vec<Goal>,
    challenges: Vec<Challenge>,
    rewards: Vec<Reward>,
    notifications: Vec<Notification>,
    policy: RewardPolicy,
    completion_rule: Box<dyn CompletionRule>
}

impl GamificationEngine {
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            challenges: Vec::new(),
            rewards: Vec::new(),
            notifications: Vec::new(),
            policy: RewardPolicy::default(),
            completion_rule: Box::new(ManualCompletion)
        }
    }

    pub fn with_policy(mut self, policy: RewardPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_completion_rule(mut self, rule: impl CompletionRule + 'static) -> Self {
        self.completion_rule = Box::new(rule);
        self
    }

    pub fn policy(&self) -> RewardPolicy {
        self.policy
    }

    pub fn add_goal(&mut self, goal: Goal) -> GoalId {
        let goal_id = self.goals.len();

        debug!("Goal [{}] added with target [{}]", goal.title(), goal.target());
        self.notifications.push(Notification::new(format!("New goal added: {}", goal.title())));
        self.goals.push(goal);

        goal_id
    }

    pub fn add_challenge(&mut self, challenge: Challenge) -> ChallengeId {
        let challenge_id = self.challenges.len();

        debug!("Challenge [{}] added with value [{}]", challenge.title(), challenge.value());
        self.notifications.push(Notification::new(format!("New challenge started: {}", challenge.title())));
        self.challenges.push(challenge);

        challenge_id
    }

    /// Latches every pending goal whose target is covered by `balance`.
    ///
    /// Each goal produces exactly one reward and one notification over the
    /// lifetime of the engine, no matter how often this is called. Returns the
    /// goals achieved during this pass.
    pub fn evaluate_goals(&mut self, balance: Decimal) -> Vec<GoalId> {
        let mut achieved = Vec::new();

        for (goal_id, goal) in self.goals.iter_mut().enumerate() {
            if !goal.check_progress(balance) {
                continue;
            }

            info!("Goal [{}] achieved with balance [{balance}]", goal.title());

            let reward = Reward::new(format!("Goal achieved: {}", goal.title()), self.policy.goal_bonus);
            self.notifications.push(Notification::new(reward.description()));
            self.rewards.push(reward);

            achieved.push(goal_id);
        }

        achieved
    }

    /// Surfaces every challenge the completion rule reports as completed.
    ///
    /// Returns the number of notifications emitted.
    pub fn evaluate_challenges(&mut self) -> usize {
        let mut emitted = 0;

        for challenge in &self.challenges {
            if self.completion_rule.is_completed(challenge) {
                self.notifications.push(Notification::new(format!("Challenge in progress: {}", challenge.title())));
                emitted += 1;
            }
        }

        emitted
    }

    pub fn complete_challenge(&mut self, challenge_id: ChallengeId) -> Result<(), GamificationError> {
        self.challenges.get_mut(challenge_id)
            .ok_or(GamificationError::ChallengeNotFound(challenge_id))?
            .complete()
    }

    pub fn redeem_reward(&mut self, index: usize) -> Result<&Reward, GamificationError> {
        let reward = self.rewards.get_mut(index)
            .ok_or(GamificationError::RewardNotFound(index))?;

        reward.redeem()?;
        info!("Reward [{}] redeemed", reward.description());

        Ok(reward)
    }

    pub fn mark_notification_read(&mut self, index: usize) -> Result<(), GamificationError> {
        self.notifications.get_mut(index)
            .ok_or(GamificationError::NotificationNotFound(index))?
            .mark_read()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|notification| !notification.is_read()).count()
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}

impl Default for GamificationEngine {
    fn default() -> Self {
        Self::new()
    }
}
