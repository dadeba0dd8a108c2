/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - auth::apply(...) で OpenID ゲートを Router に掛ける
 */
pub mod auth;
