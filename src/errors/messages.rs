//! Message templates for each known error code.
//!
//! Templates read fields from [`KnownRequestError::meta`]; any field that is
//! absent renders as the empty string.

use super::codes::KnownErrorCode;
use super::exception::KnownRequestError;
use super::locale::Locale;

/// Generic message for absent or unrecognized codes
pub fn default_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Internal server error",
        Locale::PtBr => "Erro interno do servidor",
    }
}

/// Render the message for `code` in `locale`
pub fn render(code: KnownErrorCode, locale: Locale, err: &KnownRequestError) -> String {
    match locale {
        Locale::En => render_en(code, err),
        Locale::PtBr => render_pt_br(code, err),
    }
}

fn render_en(code: KnownErrorCode, err: &KnownRequestError) -> String {
    let m = |key: &str| err.meta_text(key);

    match code {
        KnownErrorCode::P2000 => {
            "The provided value for the column is too long for the column type".to_string()
        }
        KnownErrorCode::P2001 => format!(
            "The requested record in the where condition does not exist: {}.{} = {}",
            m("model"),
            m("field"),
            m("value")
        ),
        KnownErrorCode::P2002 => format!("Uniqueness constraint failure in {}", m("target")),
        KnownErrorCode::P2003 => format!(
            "Foreign key constraint failure in the column: {}",
            err.meta_text_or(&["target", "field_name"])
        ),
        KnownErrorCode::P2004 => format!("A database constraint failed: {}", err.message),
        KnownErrorCode::P2005 => format!(
            "The value {} stored in the database for the field {} is invalid for the field type",
            m("value"),
            m("field")
        ),
        KnownErrorCode::P2006 => format!(
            "The provided value {} for the field {}.{} is not valid",
            m("value"),
            m("model"),
            m("field")
        ),
        KnownErrorCode::P2007 => format!("Data validation error: {}", err.message),
        KnownErrorCode::P2008 | KnownErrorCode::P2028 => {
            format!("Transaction API error: {}", m("error"))
        }
        KnownErrorCode::P2009 => format!(
            "Query validation error: {} at {}",
            m("query_validation_error"),
            m("query_position")
        ),
        KnownErrorCode::P2010 => format!(
            "Raw query failure. Code: {}. Message: {}",
            m("code"),
            m("message")
        ),
        KnownErrorCode::P2011 => format!(
            "Nullity constraint violation in {}",
            err.meta_text_or(&["target", "constraint"])
        ),
        KnownErrorCode::P2012 => format!("Missing mandatory value in {}", m("path")),
        KnownErrorCode::P2013 => format!(
            "Missing mandatory argument {} for the field {} in {}",
            m("argument_name"),
            m("field_name"),
            m("object_name")
        ),
        KnownErrorCode::P2014 => format!(
            "The change you're trying to make would violate the required relationship '{}' between models {} and {}",
            m("relation_name"),
            m("model_a_name"),
            m("model_b_name")
        ),
        KnownErrorCode::P2015 => format!("Related record not found: {}", m("details")),
        KnownErrorCode::P2016 => format!("Query interpretation error: {}", m("details")),
        KnownErrorCode::P2017 => format!(
            "Records in the relationship {} between models {} and {} are not connected",
            m("relation_name"),
            m("parent_name"),
            m("child_name")
        ),
        KnownErrorCode::P2018 => {
            format!("Required connected records were not found: {}", m("details"))
        }
        KnownErrorCode::P2019 => format!("Input error: {}", m("details")),
        KnownErrorCode::P2020 => format!("Value out of range for the type: {}", m("details")),
        KnownErrorCode::P2021 => format!(
            "The table {} does not exist in the current database",
            m("table")
        ),
        KnownErrorCode::P2022 => format!(
            "The column {} does not exist in the current database",
            m("column")
        ),
        KnownErrorCode::P2023 => format!("Inconsistent column data: {}", err.message),
        KnownErrorCode::P2024 => format!(
            "Timeout while acquiring a new connection in the connection pool. (More information: http://pris.ly/d/connection-pool) (Current connection pool timeout: {}, connection limit: {})",
            m("timeout"),
            m("connection_limit")
        ),
        KnownErrorCode::P2025 => format!(
            "An operation failed because it depends on one or more required records that were not found: {}",
            m("cause")
        ),
        KnownErrorCode::P2026 => format!(
            "The current database provider does not support a feature used in the query: {}",
            m("feature")
        ),
        KnownErrorCode::P2027 => format!(
            "Multiple database errors occurred during query execution: {}",
            m("errors")
        ),
        KnownErrorCode::P2030 => "A full-text index for search could not be found. Try adding @@fulltext([Fields...]) to your schema".to_string(),
        KnownErrorCode::P2031 => "Prisma needs to perform transactions, which requires your MongoDB server to run as a replica set. See details: http://pris.ly/d/mongodb-replica-set".to_string(),
        KnownErrorCode::P2033 => "A number used in the query does not fit in a 64-bit signed integer. Consider using BigInt as a field type if you're trying to store large integers".to_string(),
        KnownErrorCode::P2034 => "The transaction failed due to a write conflict or deadlock. Please try your transaction again".to_string(),
    }
}

fn render_pt_br(code: KnownErrorCode, err: &KnownRequestError) -> String {
    let m = |key: &str| err.meta_text(key);

    match code {
        KnownErrorCode::P2000 => {
            "O valor fornecido para a coluna é longo demais para o tipo da coluna".to_string()
        }
        KnownErrorCode::P2001 => format!(
            "O registro buscado na condição where não existe: {}.{} = {}",
            m("model"),
            m("field"),
            m("value")
        ),
        KnownErrorCode::P2002 => format!("Falha na restrição de unicidade em {}", m("target")),
        KnownErrorCode::P2003 => format!(
            "Falha na restrição de chave estrangeira na coluna: {}",
            err.meta_text_or(&["target", "field_name"])
        ),
        KnownErrorCode::P2004 => {
            format!("Uma restrição do banco de dados falhou: {}", err.message)
        }
        KnownErrorCode::P2005 => format!(
            "O valor {} armazenado no banco de dados para o campo {} é inválido para o tipo do campo",
            m("value"),
            m("field")
        ),
        KnownErrorCode::P2006 => format!(
            "O valor fornecido {} para o campo {}.{} não é válido",
            m("value"),
            m("model"),
            m("field")
        ),
        KnownErrorCode::P2007 => format!("Erro de validação de dados: {}", err.message),
        KnownErrorCode::P2008 | KnownErrorCode::P2028 => {
            format!("Erro na API de transação: {}", m("error"))
        }
        KnownErrorCode::P2009 => format!(
            "Erro de validação da consulta: {} em {}",
            m("query_validation_error"),
            m("query_position")
        ),
        KnownErrorCode::P2010 => format!(
            "Falha na consulta bruta. Código: {}. Mensagem: {}",
            m("code"),
            m("message")
        ),
        KnownErrorCode::P2011 => format!(
            "Violação de restrição de nulidade em {}",
            err.meta_text_or(&["target", "constraint"])
        ),
        KnownErrorCode::P2012 => format!("Valor obrigatório ausente em {}", m("path")),
        KnownErrorCode::P2013 => format!(
            "Argumento obrigatório {} ausente para o campo {} em {}",
            m("argument_name"),
            m("field_name"),
            m("object_name")
        ),
        KnownErrorCode::P2014 => format!(
            "A alteração que você está tentando fazer violaria a relação obrigatória '{}' entre os modelos {} e {}",
            m("relation_name"),
            m("model_a_name"),
            m("model_b_name")
        ),
        KnownErrorCode::P2015 => {
            format!("Registro relacionado não encontrado: {}", m("details"))
        }
        KnownErrorCode::P2016 => format!("Erro de interpretação da consulta: {}", m("details")),
        KnownErrorCode::P2017 => format!(
            "Os registros na relação {} entre os modelos {} e {} não estão conectados",
            m("relation_name"),
            m("parent_name"),
            m("child_name")
        ),
        KnownErrorCode::P2018 => format!(
            "Os registros conectados obrigatórios não foram encontrados: {}",
            m("details")
        ),
        KnownErrorCode::P2019 => format!("Erro de entrada: {}", m("details")),
        KnownErrorCode::P2020 => {
            format!("Valor fora do intervalo para o tipo: {}", m("details"))
        }
        KnownErrorCode::P2021 => format!(
            "A tabela {} não existe no banco de dados atual",
            m("table")
        ),
        KnownErrorCode::P2022 => format!(
            "A coluna {} não existe no banco de dados atual",
            m("column")
        ),
        KnownErrorCode::P2023 => format!("Dados de coluna inconsistentes: {}", err.message),
        KnownErrorCode::P2024 => format!(
            "Tempo esgotado ao obter uma nova conexão do pool de conexões. (Mais informações: http://pris.ly/d/connection-pool) (Tempo limite atual do pool: {}, limite de conexões: {})",
            m("timeout"),
            m("connection_limit")
        ),
        KnownErrorCode::P2025 => format!(
            "Uma operação falhou porque depende de um ou mais registros obrigatórios que não foram encontrados: {}",
            m("cause")
        ),
        KnownErrorCode::P2026 => format!(
            "O provedor de banco de dados atual não suporta um recurso usado na consulta: {}",
            m("feature")
        ),
        KnownErrorCode::P2027 => format!(
            "Vários erros de banco de dados ocorreram durante a execução da consulta: {}",
            m("errors")
        ),
        KnownErrorCode::P2030 => "Não foi encontrado um índice de texto completo para a busca. Tente adicionar @@fulltext([Fields...]) ao seu schema".to_string(),
        KnownErrorCode::P2031 => "O Prisma precisa executar transações, o que exige que o seu servidor MongoDB rode como um replica set. Veja detalhes: http://pris.ly/d/mongodb-replica-set".to_string(),
        KnownErrorCode::P2033 => "Um número usado na consulta não cabe em um inteiro de 64 bits com sinal. Considere usar BigInt como tipo do campo se estiver tentando armazenar inteiros grandes".to_string(),
        KnownErrorCode::P2034 => "A transação falhou devido a um conflito de escrita ou deadlock. Tente executar a transação novamente".to_string(),
    }
}
