// crates/siraj-core/src/assistant.rs

//! # Assistant
//!
//! The per-query path: utterance → extract → resolve → threshold → lookup.
//! Every failure is turned into a spoken apology; nothing here can bring the
//! process down.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::error::Result;
use crate::extract::NameExtractor;
use crate::resolve::{resolve, Resolution};

/// Default minimum score for accepting a fuzzy match.
pub const DEFAULT_THRESHOLD: u8 = 60;

/// Outcome of a successful query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub query: String,
    pub matched_name: Option<String>,
    pub score: u8,
    pub route: String,
}

impl ResolutionResult {
    pub fn found(&self) -> bool {
        self.matched_name.is_some() && !self.route.is_empty()
    }
}

/// Recoverable per-query failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Nothing that looks like a place name was said.
    #[error("no destination in utterance")]
    NoCandidate,

    #[error("best match for {query:?} scored {score} (threshold {threshold})")]
    LowConfidenceMatch {
        query: String,
        best: Option<String>,
        score: u8,
        threshold: u8,
    },

    #[error("no directions stored for {name:?}")]
    RouteNotFound { name: String, score: u8 },
}

/// Spoken replies. `{name}` and `{route}` are substituted where present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub greeting: String,
    pub prompt: String,
    pub found: String,
    pub not_understood: String,
    pub no_route: String,
    /// Used by [`Assistant::route_tool_reply`], where the name came from a
    /// dialog manager rather than from resolution.
    pub tool_not_found: String,
    pub farewell: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            greeting: "سراجْ جاهز للاستماع، قل «سراج» عندما تريد السؤال عن مطعم.".into(),
            prompt: "تفضل، ما سؤالك؟".into(),
            found: "أقرب مسار لمطعم {name} هو: {route}".into(),
            not_understood: "عذراً، لم أتعرف على اسم المطعم. حاول مرة أخرى.".into(),
            no_route: "للأسف لا توجد توجيهات متوفرة لهذه الوجهة.".into(),
            tool_not_found: "عذراً، لا أجد توجيهات لمطعم “{name}”.".into(),
            farewell: "مع السلامة! أي سؤال آخر؟".into(),
        }
    }
}

impl Messages {
    pub fn render_found(&self, name: &str, route: &str) -> String {
        fill(&self.found, name, route)
    }

    /// Apology for a failed query.
    pub fn render_error(&self, err: &QueryError) -> String {
        match err {
            QueryError::NoCandidate | QueryError::LowConfidenceMatch { .. } => {
                self.not_understood.clone()
            }
            QueryError::RouteNotFound { name, .. } => fill(&self.no_route, name, ""),
        }
    }
}

// Single pass, so placeholder text inside `name` is never expanded again.
fn fill(template: &str, name: &str, route: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + route.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{name}") {
            out.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{route}") {
            out.push_str(route);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Answers destination questions from a borrowed catalog.
#[derive(Debug, Clone)]
pub struct Assistant<'a> {
    catalog: &'a Catalog,
    extractor: NameExtractor,
    threshold: u8,
    messages: Messages,
}

impl<'a> Assistant<'a> {
    pub fn new(catalog: &'a Catalog, extractor: NameExtractor, threshold: u8) -> Self {
        Self {
            catalog,
            extractor,
            threshold,
            messages: Messages::default(),
        }
    }

    /// Builds an assistant with the markers, threshold and messages from
    /// `settings`.
    pub fn from_settings(catalog: &'a Catalog, settings: &Settings) -> Result<Self> {
        let extractor = NameExtractor::new(&settings.markers)?;
        Ok(Self::new(catalog, extractor, settings.threshold).with_messages(settings.messages.clone()))
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn extractor(&self) -> &NameExtractor {
        &self.extractor
    }

    /// Runs the full query path and returns the structured result.
    ///
    /// The route is only looked up once the match clears the threshold.
    pub fn answer(&self, utterance: &str) -> std::result::Result<ResolutionResult, QueryError> {
        let query = self.extract_query(utterance)?;
        let resolution = self.resolve_query(query)?;
        self.lookup_route(resolution)
    }

    /// Step 1: the candidate name, or [`QueryError::NoCandidate`].
    pub fn extract_query<'u>(&self, utterance: &'u str) -> std::result::Result<&'u str, QueryError> {
        match self.extractor.extract(utterance) {
            "" => Err(QueryError::NoCandidate),
            query => Ok(query),
        }
    }

    /// Step 2: the best catalog name, rejected below the threshold.
    pub fn resolve_query(&self, query: &str) -> std::result::Result<Resolution, QueryError> {
        let resolution = resolve(query, self.catalog);
        if resolution.is_accepted(self.threshold) {
            return Ok(resolution);
        }
        tracing::warn!(
            query,
            best = ?resolution.matched_name,
            score = resolution.score,
            "low confidence match"
        );
        Err(QueryError::LowConfidenceMatch {
            query: resolution.query,
            best: resolution.matched_name,
            score: resolution.score,
            threshold: self.threshold,
        })
    }

    /// Step 3: the stored route for an accepted resolution.
    pub fn lookup_route(
        &self,
        resolution: Resolution,
    ) -> std::result::Result<ResolutionResult, QueryError> {
        let Resolution {
            query,
            matched_name,
            score,
        } = resolution;
        let Some(name) = matched_name else {
            return Err(QueryError::LowConfidenceMatch {
                query,
                best: None,
                score,
                threshold: self.threshold,
            });
        };

        let route = self.catalog.lookup(&name);
        if route.is_empty() {
            return Err(QueryError::RouteNotFound { name, score });
        }

        tracing::debug!(query = %query, name = %name, score, "destination resolved");
        Ok(ResolutionResult {
            query,
            route: route.to_owned(),
            matched_name: Some(name),
            score,
        })
    }

    /// The text to speak back for `utterance`.
    pub fn reply(&self, utterance: &str) -> String {
        match self.answer(utterance) {
            Ok(result) => {
                let name = result.matched_name.as_deref().unwrap_or_default();
                self.messages.render_found(name, &result.route)
            }
            Err(err) => self.messages.render_error(&err),
        }
    }

    /// Reply for a restaurant name chosen by an external dialog manager.
    ///
    /// Uses [`Catalog::route_for`]: exact name first, fuzzy fallback at the
    /// configured threshold.
    pub fn route_tool_reply(&self, restaurant: &str) -> String {
        let restaurant = restaurant.trim();
        let route = self.catalog.route_for(restaurant, self.threshold);
        if route.is_empty() {
            fill(&self.messages.tool_not_found, restaurant, "")
        } else {
            self.messages.render_found(restaurant, route)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn catalog() -> Catalog {
        Catalog::from_entries(vec![
            CatalogEntry::new("مطعم الديوان", "يسار ثم يمين"),
            CatalogEntry::new("مطعم البيك", ""),
        ])
    }

    #[test]
    fn answers_with_route() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);

        let result = assistant.answer("خذني إلى مطعم الديوان").unwrap();
        assert_eq!(result.query, "مطعم الديوان");
        assert_eq!(result.matched_name.as_deref(), Some("مطعم الديوان"));
        assert_eq!(result.score, 100);
        assert_eq!(result.route, "يسار ثم يمين");
        assert!(result.found());

        let reply = assistant.reply("خذني إلى مطعم الديوان");
        assert!(reply.contains("مطعم الديوان"));
        assert!(reply.contains("يسار ثم يمين"));
    }

    #[test]
    fn low_confidence_is_not_understood() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);

        let err = assistant.answer("أريد مطعم غير موجود").unwrap_err();
        assert!(matches!(err, QueryError::LowConfidenceMatch { score, .. } if score < 60));
        assert_eq!(assistant.reply("أريد مطعم غير موجود"), Messages::default().not_understood);
    }

    #[test]
    fn empty_extraction_is_no_candidate() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
        assert_eq!(assistant.answer("خذني إلى"), Err(QueryError::NoCandidate));
        assert_eq!(assistant.answer(""), Err(QueryError::NoCandidate));
    }

    #[test]
    fn missing_route_has_its_own_apology() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
        let err = assistant.answer("إلى مطعم البيك").unwrap_err();
        assert_eq!(
            err,
            QueryError::RouteNotFound {
                name: "مطعم البيك".into(),
                score: 100
            }
        );
        assert_eq!(assistant.reply("إلى مطعم البيك"), Messages::default().no_route);
    }

    #[test]
    fn empty_catalog_never_panics() {
        let catalog = Catalog::default();
        let assistant = Assistant::new(&catalog, NameExtractor::default(), 0);
        assert!(matches!(
            assistant.answer("إلى مطعم الديوان"),
            Err(QueryError::LowConfidenceMatch { best: None, score: 0, .. })
        ));
    }

    #[test]
    fn route_tool_uses_exact_then_fuzzy() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
        assert_eq!(
            assistant.route_tool_reply("مطعم الديوان"),
            "أقرب مسار لمطعم مطعم الديوان هو: يسار ثم يمين"
        );
        assert!(assistant.route_tool_reply("الديوان").ends_with("يسار ثم يمين"));
        assert_eq!(
            assistant.route_tool_reply("مطعم البيك"),
            "عذراً، لا أجد توجيهات لمطعم “مطعم البيك”."
        );
    }

    #[test]
    fn steps_run_one_at_a_time() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);

        let query = assistant.extract_query("خذني إلى مطعم الديون").unwrap();
        assert_eq!(query, "مطعم الديون");
        assert_eq!(assistant.extract_query("خذني إلى"), Err(QueryError::NoCandidate));

        let resolution = assistant.resolve_query(query).unwrap();
        assert_eq!(resolution.matched_name.as_deref(), Some("مطعم الديوان"));
        assert!(matches!(
            assistant.resolve_query("غير موجود"),
            Err(QueryError::LowConfidenceMatch { .. })
        ));

        let result = assistant.lookup_route(resolution).unwrap();
        assert_eq!(result.route, "يسار ثم يمين");
        assert_eq!(result.query, "مطعم الديون");

        let no_route = assistant.resolve_query("مطعم البيك").unwrap();
        assert!(matches!(
            assistant.lookup_route(no_route),
            Err(QueryError::RouteNotFound { score: 100, .. })
        ));
    }

    #[test]
    fn placeholders_are_filled_once() {
        assert_eq!(fill("{name}: {route}", "مطعم {route}", "يمين"), "مطعم {route}: يمين");
        assert_eq!(fill("{route} / {name}", "{name}", "{x}"), "{x} / {name}");
        assert_eq!(fill("{ok} {name", "a", "b"), "{ok} {name");
        assert_eq!(fill("", "a", "b"), "");
    }

    #[test]
    fn restaurant_name_with_placeholder_text() {
        let catalog = Catalog::from_entries(vec![CatalogEntry::new("مقهى {route}", "يسار")]);
        let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
        assert_eq!(
            assistant.route_tool_reply("مقهى {route}"),
            "أقرب مسار لمطعم مقهى {route} هو: يسار"
        );
        assert_eq!(
            fill(&Messages::default().tool_not_found, "{route}", ""),
            "عذراً، لا أجد توجيهات لمطعم “{route}”."
        );
    }

    #[test]
    fn custom_messages() {
        let catalog = catalog();
        let messages = Messages {
            found: "{name}: {route}".into(),
            ..Messages::default()
        };
        let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD)
            .with_messages(messages);
        assert_eq!(assistant.reply("مطعم الديوان"), "مطعم الديوان: يسار ثم يمين");
    }
}
