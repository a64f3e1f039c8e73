use crate::{utils::math::vector::ZeroSpVec, vectorizer::{term::TermFrequency, vocabulary::Vocabulary}};

/// L2-normalized TF-IDF weights of one document, keyed by term index
pub type DocumentVector = ZeroSpVec<f64>;

/// TF-IDF calculation strategy.
///
/// Implementors provide the IDF vector and the TF vector; `weigh` combines
/// them and normalizes to unit length.
pub trait TFIDFEngine {
    /// IDF per vocabulary index
    fn idf_vec(vocabulary: &Vocabulary) -> Vec<f64>;

    /// TF per term present in the document
    fn tf_vec(freq: &TermFrequency) -> ZeroSpVec<f64>;

    /// tf * idf, divided by the Euclidean norm.
    /// A document without terms gives the zero vector.
    fn weigh(freq: &TermFrequency, idf: &[f64]) -> DocumentVector {
        Self::tf_vec(freq)
            .map_values(|index, tf| tf * idf[index])
            .l2_normalized()
    }
}

/// Smoothed IDF shared by the engines:
/// idf(t) = ln((1 + N) / (1 + df(t))) + 1
///
/// Always positive for a term with df >= 1.
#[inline]
pub fn smooth_idf(doc_num: u64, doc_freq: u64) -> f64 {
    ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

fn smooth_idf_vec(vocabulary: &Vocabulary) -> Vec<f64> {
    let doc_num = vocabulary.doc_num();
    vocabulary.iter().map(|(_, doc_freq)| smooth_idf(doc_num, doc_freq)).collect()
}

/// Default engine: raw counts as TF
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    fn idf_vec(vocabulary: &Vocabulary) -> Vec<f64> {
        smooth_idf_vec(vocabulary)
    }

    fn tf_vec(freq: &TermFrequency) -> ZeroSpVec<f64> {
        freq.counts().map_values(|_, count| count as f64)
    }
}

/// Sublinear TF: 1 + ln(count), dampens terms repeated many times
#[derive(Debug, Clone, Copy, Default)]
pub struct SublinearTFIDFEngine;

impl TFIDFEngine for SublinearTFIDFEngine {
    fn idf_vec(vocabulary: &Vocabulary) -> Vec<f64> {
        smooth_idf_vec(vocabulary)
    }

    fn tf_vec(freq: &TermFrequency) -> ZeroSpVec<f64> {
        freq.counts().map_values(|_, count| 1.0 + (count as f64).ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::vectorizer::{token::Tokenizer, vocabulary::VocabularyBuilder};

    fn prepare(docs: &[&str]) -> (Tokenizer, Vocabulary) {
        let tokenizer = Tokenizer::new(&AnalyzerConfig::default().with_ngram_range(1, 1).unwrap()).unwrap();
        let mut builder = VocabularyBuilder::new(&tokenizer);
        for doc in docs {
            builder.add(doc);
        }
        let vocab = builder.build().unwrap();
        (tokenizer, vocab)
    }

    #[test]
    fn smooth_idf_values() {
        assert_eq!(smooth_idf(2, 2), 1.0);
        assert!((smooth_idf(2, 1) - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-15);
        assert!(smooth_idf(100, 100) > 0.0);
    }

    #[test]
    fn weights_are_tf_times_idf_then_normalized() {
        let docs = ["apple apple banana", "banana cherry"];
        let (tokenizer, vocab) = prepare(&docs);
        let idf = DefaultTFIDFEngine::idf_vec(&vocab);
        assert_eq!(idf.len(), vocab.len());

        let freq = TermFrequency::from_terms(tokenizer.terms(docs[0]), &vocab);
        let v = DefaultTFIDFEngine::weigh(&freq, &idf);

        let apple = vocab.index_of("apple").unwrap();
        let banana = vocab.index_of("banana").unwrap();
        let raw_apple = 2.0 * smooth_idf(2, 1);
        let raw_banana = 1.0 * smooth_idf(2, 2);
        let norm = (raw_apple * raw_apple + raw_banana * raw_banana).sqrt();
        assert!((v.get(apple) - raw_apple / norm).abs() < 1e-12);
        assert!((v.get(banana) - raw_banana / norm).abs() < 1e-12);
        assert!((v.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_document_weighs_to_zero_vector() {
        let docs = ["apple", ""];
        let (tokenizer, vocab) = prepare(&docs);
        let idf = DefaultTFIDFEngine::idf_vec(&vocab);
        let freq = TermFrequency::from_terms(tokenizer.terms(docs[1]), &vocab);
        assert!(DefaultTFIDFEngine::weigh(&freq, &idf).is_zero());
    }

    #[test]
    fn sublinear_dampens_repetition() {
        let docs = ["apple apple apple apple banana", "banana cherry"];
        let (tokenizer, vocab) = prepare(&docs);
        let freq = TermFrequency::from_terms(tokenizer.terms(docs[0]), &vocab);
        let apple = vocab.index_of("apple").unwrap();
        let raw = DefaultTFIDFEngine::tf_vec(&freq);
        let sub = SublinearTFIDFEngine::tf_vec(&freq);
        assert_eq!(raw.get(apple), 4.0);
        assert!((sub.get(apple) - (1.0 + 4.0f64.ln())).abs() < 1e-12);

        let idf = SublinearTFIDFEngine::idf_vec(&vocab);
        assert!((SublinearTFIDFEngine::weigh(&freq, &idf).norm() - 1.0).abs() < 1e-9);
    }
}
