//! Badges, personal stats, and the points leaderboard.

#[cfg(test)]
#[path = "achievements_test.rs"]
mod achievements_test;

use courseware::forum::Author;
use courseware::gamification::{
    Badge, GamificationStats, LEADERBOARD_LIMIT, LeaderboardEntry, UserBadge, has_badge, rank_label,
};
use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::remote::{self, Remote, status_text};

/// Position of `user_id` on the loaded leaderboard, if present.
fn own_rank(entries: &[LeaderboardEntry], user_id: &str) -> Option<i64> {
    entries.iter().find(|e| e.user_id == user_id).and_then(|e| e.rank)
}

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let stats = RwSignal::new(Remote::<GamificationStats>::Loading);
    let badges = RwSignal::new(Remote::<Vec<Badge>>::Loading);
    let earned = RwSignal::new(Remote::<Vec<UserBadge>>::Loading);
    let leaders = RwSignal::new(Remote::<Vec<LeaderboardEntry>>::Loading);

    Effect::new(move || remote::load(badges, "badge catalog", api::badges()));
    Effect::new(move || remote::load(leaders, "leaderboard", api::leaderboard(LEADERBOARD_LIMIT)));
    Effect::new(move || {
        let Some(user_id) = auth.get().user_id() else {
            return;
        };
        let for_badges = user_id.clone();
        remote::load(stats, "gamification stats", async move { api::gamification_stats(&user_id).await });
        remote::load(earned, "earned badges", async move { api::user_badges(&for_badges).await });
    });

    let stat = move |pick: fn(&GamificationStats) -> String| move || stats.with(|s| s.ready().map(pick).unwrap_or_default());
    let rank = move || {
        let from_stats = stats.with(|s| s.ready().and_then(|s| s.rank));
        let from_board = auth
            .get()
            .user_id()
            .and_then(|id| leaders.with(|l| l.ready().and_then(|l| own_rank(l, &id))));
        from_stats.or(from_board).map_or_else(|| "-".to_owned(), rank_label)
    };
    let completion = Signal::derive(move || stats.with(|s| s.ready().map_or(0, GamificationStats::badge_completion)));

    view! {
        <div class="achievements-page">
            <header class="page-header">
                <h1>"Achievements"</h1>
            </header>
            <section class="stat-grid">
                <StatCard label="Points" value=Signal::derive(stat(|s| s.total_points.to_string()))/>
                <StatCard label="Rank" value=Signal::derive(rank)/>
                <StatCard label="Courses completed" value=Signal::derive(stat(|s| s.courses_completed.to_string()))/>
                <StatCard label="Day streak" value=Signal::derive(stat(|s| s.streak_days.to_string()))/>
            </section>
            <section class="badges">
                <h2>
                    {move || stats.with(|s| s.ready().map(|s| format!("Badges ({} of {})", s.badges_earned, s.total_badges)).unwrap_or_else(|| "Badges".to_owned()))}
                </h2>
                <ProgressBar percent=completion label=true/>
                {move || badges.with(|b| status_text(b, "badges")).map(|text| view! { <p class="page-status">{text}</p> })}
                <div class="badge-grid">
                    {move || {
                        let mine = earned.with(|e| e.ready_or(Vec::new()));
                        badges
                            .with(|b| b.ready_or(Vec::new()))
                            .into_iter()
                            .map(|badge| {
                                let unlocked = has_badge(&mine, &badge.id);
                                view! {
                                    <div class="badge" class:badge--locked={!unlocked} title=badge.description.clone().unwrap_or_default()>
                                        <span class="badge__icon">{badge.icon.clone().unwrap_or_else(|| "🏅".to_owned())}</span>
                                        <span class="badge__name">{badge.name.clone()}</span>
                                        <span class="badge__points">{format!("{} pts", badge.points)}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
            <section class="leaderboard">
                <h2>"Leaderboard"</h2>
                {move || leaders.with(|l| status_text(l, "leaderboard")).map(|text| view! { <p class="page-status">{text}</p> })}
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Learner"</th>
                            <th>"Points"</th>
                            <th>"Courses"</th>
                            <th>"Streak"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let me = auth.get().user_id();
                            leaders
                                .with(|l| l.ready_or(Vec::new()))
                                .into_iter()
                                .map(|entry| {
                                    let is_me = me.as_deref() == Some(entry.user_id.as_str());
                                    view! {
                                        <tr class:table__row--highlight=is_me>
                                            <td>{entry.rank.map(rank_label).unwrap_or_default()}</td>
                                            <td>{Author::display_name(entry.user.as_ref()).to_owned()}</td>
                                            <td>{entry.total_points}</td>
                                            <td>{entry.courses_completed}</td>
                                            <td>{format!("{} days", entry.streak_days)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
