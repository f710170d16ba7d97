//! Administrative reseeding.
//!
//! Reseeding is a full replace: question content is wiped, the context
//! vocabulary is reloaded from [`permitted_core::catalog`], and the shipped
//! question content is inserted. It must never run concurrently with
//! serving traffic.

use permitted_core::{
  catalog,
  question::{NewAnswer, NewQuestion, NewSource, Verdict},
};

use crate::{Result, SqliteStore, encode::decode_dt};

/// Wipe and reload the store: catalog plus shipped question content.
pub async fn seed(store: &SqliteStore) -> Result<()> {
  store.clear_questions().await?;
  store.replace_contexts(catalog::ENTRIES).await?;
  for question in shipped_questions()? {
    store.insert_question(question).await?;
  }
  Ok(())
}

fn shipped_questions() -> Result<Vec<NewQuestion>> {
  let verified_at = decode_dt("2026-01-07T00:00:00Z")?;

  Ok(vec![NewQuestion {
    slug:     "can-i-work-off-campus".into(),
    title:    "Can I work off-campus while studying?".into(),
    category: "Work Rules".into(),
    answer:   Some(NewAnswer {
      allowed:      Verdict::Depends,
      conditions:   Some(
        "You can work off-campus up to 20 hours per week during regular \
         academic sessions if you have a valid study permit that allows \
         off-campus work, you are enrolled full-time at a designated \
         learning institution (DLI), and you are studying in a program that \
         is at least 6 months long and leads to a degree, diploma, or \
         certificate."
          .into(),
      ),
      consequences: Some(
        "Working more than 20 hours per week (except during scheduled \
         breaks) or working without authorization can result in: loss of \
         student status, denial of future study or work permits, removal \
         order from Canada, and impact on future immigration applications."
          .into(),
      ),
      verified_at,
      sources:      vec![NewSource {
        name:        "Work off campus as an international student".into(),
        url:         "https://www.canada.ca/en/immigration-refugees-citizenship/services/study-canada/work/work-off-campus.html".into(),
        authority:   "IRCC".into(),
        accessed_at: verified_at,
      }],
    }),
    contexts: [
      "STUDYING",
      "ON",
      "BC",
      "AB",
      "COLLEGE_DIPLOMA",
      "UNDERGRADUATE",
      "MASTERS",
      "PHD",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect(),
  }])
}
