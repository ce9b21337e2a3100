//! # JSON Vocabulary IO

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{
    Deserialize,
    Deserializer,
    Serializer,
    de::{MapAccess, Visitor},
};
use serde_json::ser::PrettyFormatter;

use crate::{
    errors::{OTResult, OdiaTokError},
    types::TokenType,
    vocab::TokenVocab,
};

/// Raw ``(key, token)`` entries of a vocab JSON object, in file order.
///
/// Duplicate keys are kept, so they can be rejected downstream.
#[derive(Debug, Clone, PartialEq)]
struct RawVocabEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawVocabEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawVocabEntries;

            fn expecting(
                &self,
                f: &mut fmt::Formatter,
            ) -> fmt::Result {
                f.write_str("a map of token ids to token strings")
            }

            fn visit_map<A>(
                self,
                mut map: A,
            ) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(RawVocabEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

fn parse_token_id<T: TokenType>(key: &str) -> OTResult<T> {
    let id: u64 = key
        .trim()
        .parse()
        .map_err(|e: core::num::ParseIntError| OdiaTokError::Parse(format!("id {key:?}: {e}")))?;
    T::from_u64(id).ok_or(OdiaTokError::TokenOutOfRange)
}

/// Load a [`TokenVocab`] from a JSON vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_json_vocab_path<T, P>(path: P) -> OTResult<TokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let vocab = read_json_vocab(reader)?;
    log::info!("Loaded {} tokens from {}", vocab.len(), path.display());
    Ok(vocab)
}

/// Read a [`TokenVocab`] from a JSON reader.
///
/// The object must map decimal ids to non-empty token strings,
/// be a bijection, and hold the special tokens at their reserved ids.
///
/// # Arguments
/// * `reader` - the JSON reader.
pub fn read_json_vocab<T, R>(reader: R) -> OTResult<TokenVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let RawVocabEntries(entries) = serde_json::from_reader(reader)?;

    let entries = entries
        .into_iter()
        .map(|(key, token)| Ok((parse_token_id::<T>(&key)?, token)))
        .collect::<OTResult<Vec<_>>>()?;

    let vocab = TokenVocab::from_id_to_token(entries)?;
    vocab.validate_specials()?;
    Ok(vocab)
}

/// Save a [`TokenVocab`] to a JSON vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_json_vocab_path<T, P>(
    vocab: &TokenVocab<T>,
    path: P,
) -> OTResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_vocab(vocab, &mut writer)?;
    log::info!("Saved {} tokens to {}", vocab.len(), path.display());
    Ok(())
}

/// Write a [`TokenVocab`] to a [`Write`] writer.
///
/// Entries are written in ascending id order, with 4-space indentation;
/// non-ASCII token text is written literally.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_json_vocab<T, W>(
    vocab: &TokenVocab<T>,
    writer: &mut W,
) -> OTResult<()>
where
    T: TokenType,
    W: Write,
{
    {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        (&mut ser).collect_map(
            vocab
                .ordered_entries()
                .into_iter()
                .map(|(id, token)| (id.to_string(), token)),
        )?;
    }
    writer.flush()?;
    Ok(())
}
