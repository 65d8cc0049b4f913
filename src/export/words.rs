use std::io::Write;

use crate::export::{Export, ExportError};
use crate::model::{ResourceId, Word, WordList};

fn resource_cell(id: Option<ResourceId>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn write_md_table(buffer: &mut Vec<u8>, words: &[Word]) -> Result<(), ExportError> {
    writeln!(buffer, "| English | Miwok | Image | Audio |")?;
    writeln!(buffer, "|---------|-------|-------|-------|")?;
    for word in words {
        writeln!(
            buffer,
            "| {} | {} | {} | {} |",
            word.default_translation(),
            word.local_translation(),
            resource_cell(word.image_resource_id()),
            resource_cell(word.audio_resource_id())
        )?;
    }
    Ok(())
}

impl Export for [Word] {
    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for word in self {
            wtr.serialize(word)?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        write_md_table(&mut buffer, self)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(ExportError::Json)
    }
}

impl Export for WordList {
    fn to_csv(&self) -> Result<String, ExportError> {
        self.words().to_csv()
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        writeln!(buffer, "## {}\n", self.category().title())?;
        write_md_table(&mut buffer, self.words())?;
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(ExportError::Json)
    }
}
