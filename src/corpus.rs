extern crate csv;
extern crate fnv;

use std::io::Read;

use fnv::FnvHashMap;

use errors::Error;

/// One corpus row: a catalog coin and its free-text description. The
/// description may be empty, such coins vectorize to zero.
#[derive(Debug, Deserialize)]
pub struct CoinDocument {
    #[serde(rename = "coinId")]
    pub coin_id: String,
    pub description: String,
}

/// The set of coin descriptions a batch run works on. Row order is load
/// order; ids are unique within the corpus and double as the output keys.
pub struct Corpus {
    documents: Vec<CoinDocument>,
    positions: FnvHashMap<String, u32>,
}

impl Corpus {

    /// Reads a CSV file with a header row. A `coinId` and a `description`
    /// column are required, further columns are ignored.
    pub fn from_csv_path(file: &str) -> Result<Corpus, Error> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(file)?;

        Corpus::from_records(reader)
    }

    pub fn from_csv_reader<R: Read>(input: R) -> Result<Corpus, Error> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);

        Corpus::from_records(reader)
    }

    fn from_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Corpus, Error> {

        let mut documents: Vec<CoinDocument> = Vec::new();
        let mut positions: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        for record in reader.deserialize() {
            let document: CoinDocument = record?;

            let position = documents.len() as u32;
            if positions.insert(document.coin_id.clone(), position).is_some() {
                return Err(Error::DuplicateCoin(document.coin_id));
            }

            documents.push(document);
        }

        Ok(Corpus { documents, positions })
    }

    pub fn num_coins(&self) -> usize {
        self.documents.len()
    }

    pub fn documents(&self) -> &[CoinDocument] {
        &self.documents
    }

    /// Row position of a coin id, if the corpus contains it.
    pub fn position(&self, coin_id: &str) -> Option<u32> {
        self.positions.get(coin_id).cloned()
    }

    /// Restores the original coin id for a row position.
    pub fn coin_id(&self, position: u32) -> &str {
        &self.documents[position as usize].coin_id
    }
}

#[cfg(test)]
mod tests {

    use std::env;
    use std::fs;

    use corpus::Corpus;
    use errors::Error;

    #[test]
    fn loads_ids_and_descriptions() {
        let input = "coinId,description\n\
                     bitcoin,digital gold\n\
                     ethereum,smart contracts\n";

        let corpus = Corpus::from_csv_reader(input.as_bytes()).unwrap();

        assert_eq!(corpus.num_coins(), 2);
        assert_eq!(corpus.position("bitcoin"), Some(0));
        assert_eq!(corpus.position("ethereum"), Some(1));
        assert_eq!(corpus.position("dogecoin"), None);
        assert_eq!(corpus.coin_id(1), "ethereum");
        assert_eq!(corpus.documents()[0].description, "digital gold");
    }

    #[test]
    fn keeps_quoted_and_empty_descriptions() {
        let input = "coinId,description\n\
                     bitcoin,\"store of value, 'digital gold'\"\n\
                     tether,\n";

        let corpus = Corpus::from_csv_reader(input.as_bytes()).unwrap();

        assert_eq!(corpus.documents()[0].description, "store of value, 'digital gold'");
        assert_eq!(corpus.documents()[1].description, "");
    }

    #[test]
    fn ignores_additional_columns() {
        let input = "rank,coinId,description\n\
                     1,bitcoin,digital gold\n";

        let corpus = Corpus::from_csv_reader(input.as_bytes()).unwrap();

        assert_eq!(corpus.num_coins(), 1);
        assert_eq!(corpus.documents()[0].description, "digital gold");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let input = "coinId,description\n\
                     bitcoin,digital gold\n\
                     bitcoin,digital gold again\n";

        match Corpus::from_csv_reader(input.as_bytes()) {
            Err(Error::DuplicateCoin(ref coin_id)) => assert_eq!(coin_id, "bitcoin"),
            _ => panic!("duplicate ids must be rejected"),
        }
    }

    #[test]
    fn rejects_a_source_without_the_description_column() {
        let input = "coinId,name\n\
                     bitcoin,Bitcoin\n";

        match Corpus::from_csv_reader(input.as_bytes()) {
            Err(Error::CorpusLoad(_)) => (),
            _ => panic!("a source without descriptions must be rejected"),
        }
    }

    #[test]
    fn rejects_rows_with_missing_fields() {
        let input = "coinId,description\n\
                     bitcoin\n";

        match Corpus::from_csv_reader(input.as_bytes()) {
            Err(Error::CorpusLoad(_)) => (),
            _ => panic!("short rows must be rejected"),
        }
    }

    #[test]
    fn rejects_an_unreadable_source() {
        match Corpus::from_csv_path("/definitely/not/here.csv") {
            Err(Error::CorpusLoad(_)) => (),
            _ => panic!("unreadable sources must be rejected"),
        }
    }

    #[test]
    fn a_corpus_without_rows_is_valid() {
        let corpus = Corpus::from_csv_reader("coinId,description\n".as_bytes()).unwrap();

        assert_eq!(corpus.num_coins(), 0);
    }

    #[test]
    fn loads_from_a_file() {
        let path = env::temp_dir().join("relco-corpus-fixture.csv");
        fs::write(&path, "coinId,description\nbitcoin,digital gold\n").unwrap();

        let corpus = Corpus::from_csv_path(path.to_str().unwrap()).unwrap();

        assert_eq!(corpus.num_coins(), 1);
        assert_eq!(corpus.coin_id(0), "bitcoin");

        fs::remove_file(&path).unwrap();
    }
}
