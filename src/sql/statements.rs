//! Every statement binds caller values positionally; nothing is interpolated.

pub const TABLE: &str = "imoveis";

const COLUMNS: &str =
    "id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao";

pub fn select_all() -> String {
    format!("SELECT {COLUMNS} FROM {TABLE} ORDER BY id")
}

pub fn select_by_cidade() -> String {
    format!("SELECT {COLUMNS} FROM {TABLE} WHERE cidade = ? ORDER BY id")
}

pub fn select_by_id() -> String {
    format!("SELECT {COLUMNS} FROM {TABLE} WHERE id = ?")
}

pub fn insert() -> String {
    format!(
        "INSERT INTO {TABLE} (logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
    )
}

pub fn update() -> String {
    format!(
        "UPDATE {TABLE} SET logradouro = ?, tipo_logradouro = ?, bairro = ?, cidade = ?, cep = ?, \
         tipo = ?, valor = ?, data_aquisicao = ? WHERE id = ?"
    )
}

pub fn delete() -> String {
    format!("DELETE FROM {TABLE} WHERE id = ?")
}

pub fn exists_by_id() -> String {
    format!("SELECT 1 FROM {TABLE} WHERE id = ?")
}

pub fn create_table() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {TABLE} (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            logradouro VARCHAR(255) NOT NULL,
            tipo_logradouro VARCHAR(64) NOT NULL,
            bairro VARCHAR(255) NOT NULL,
            cidade VARCHAR(255) NOT NULL,
            cep VARCHAR(16) NOT NULL,
            tipo VARCHAR(64) NOT NULL,
            valor VARCHAR(32) NOT NULL,
            data_aquisicao DATE NOT NULL,
            INDEX idx_imoveis_cidade (cidade)
        )
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn placeholder_counts_match_bound_values() {
        assert_eq!(placeholders(&select_all()), 0);
        assert_eq!(placeholders(&select_by_cidade()), 1);
        assert_eq!(placeholders(&select_by_id()), 1);
        assert_eq!(placeholders(&insert()), 8);
        assert_eq!(placeholders(&update()), 9);
        assert_eq!(placeholders(&delete()), 1);
    }

    #[test]
    fn selects_columns_in_record_order() {
        assert!(select_all().starts_with(
            "SELECT id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao FROM imoveis"
        ));
    }
}
