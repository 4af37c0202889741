use ddlkit::prelude::*;

struct Shipment {
    fields: Vec<Field>,
    mixins: Vec<Mixin>,
    indexes: Vec<Index>,
}

impl Shipment {
    fn new() -> Self {
        Self {
            fields: vec![
                UuidField::new("id")
                    .primary_key()
                    .with_default(SqlFunction::UUID_GENERATE_V4)
                    .into(),
                CharField::new("pro_number", 100)
                    .unique()
                    .comment("Carrier PRO number")
                    .into(),
                NumericField::new("weight", 10, 2).with_default(0.0).into(),
                PositiveIntegerField::new("pieces").with_default(1).into(),
                ForeignKeyField::new("customer_id", "customers", "id")
                    .on_delete(ReferentialAction::Cascade)
                    .indexed()
                    .into(),
                ForeignKeyField::new("origin_id", "locations", "id")
                    .nullable()
                    .on_delete(ReferentialAction::SetNull)
                    .on_update(ReferentialAction::Cascade)
                    .into(),
            ],
            mixins: vec![Mixin::timestamped()],
            indexes: vec![
                Index::on_columns(["customer_id"]).expression(Expression::lower("pro_number")),
                Index::new()
                    .expression(Expression::gin("tags"))
                    .named("shipments_tags_gin"),
            ],
        }
    }
}

impl Model for Shipment {
    fn table_name(&self) -> &str {
        "shipments"
    }

    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn mixins(&self) -> &[Mixin] {
        &self.mixins
    }

    fn indexes(&self) -> &[Index] {
        &self.indexes
    }
}

#[test]
fn create_table_lists_every_column_then_foreign_keys() {
    let model = Shipment::new();
    let sql = TableSql::new(&model);
    sql.validate().unwrap();

    let expected = [
        r#""id" uuid NOT NULL PRIMARY KEY DEFAULT uuid_generate_v4()"#,
        r#""pro_number" VARCHAR(100) NOT NULL UNIQUE"#,
        r#""weight" NUMERIC(10, 2) NOT NULL DEFAULT 0.00"#,
        r#""pieces" INTEGER NOT NULL DEFAULT 1 CHECK (pieces > 0)"#,
        r#""customer_id" INTEGER NOT NULL"#,
        r#""origin_id" INTEGER"#,
        r#""created_at" DATE NOT NULL DEFAULT CURRENT_TIMESTAMP"#,
        r#""updated_at" DATE NOT NULL DEFAULT CURRENT_TIMESTAMP"#,
        r#"FOREIGN KEY ("customer_id") REFERENCES "customers"("id") ON DELETE CASCADE"#,
        r#"FOREIGN KEY ("origin_id") REFERENCES "locations"("id") ON DELETE SET NULL ON UPDATE CASCADE"#,
    ]
    .join(", ");

    assert_eq!(
        sql.create_table_sql(),
        format!(r#"CREATE TABLE IF NOT EXISTS "shipments" ({expected});"#)
    );
}

#[test]
fn one_statement_per_index() {
    let model = Shipment::new();
    let indexes = TableSql::new(&model).create_indexes_sql().unwrap();

    assert_eq!(
        indexes,
        [
            r#"CREATE INDEX IF NOT EXISTS "shipments_customer_id_pro_number_idx" ON "shipments" ("customer_id", LOWER("pro_number"));"#,
            r#"CREATE INDEX IF NOT EXISTS "shipments_tags_gin" ON "shipments" (USING GIN ("tags"));"#,
        ]
    );
}

#[test]
fn comments_cover_own_and_mixin_columns() {
    let model = Shipment::new();
    let comments = TableSql::new(&model).comment_sql();

    assert_eq!(
        comments,
        [
            r#"COMMENT ON COLUMN "shipments"."pro_number" IS 'Carrier PRO number';"#,
            r#"COMMENT ON COLUMN "shipments"."created_at" IS 'Creation timestamp';"#,
            r#"COMMENT ON COLUMN "shipments"."updated_at" IS 'Update timestamp';"#,
        ]
    );
}

#[test]
fn column_indexes_follow_model_indexes() {
    let model = Shipment::new();
    let statements = TableSql::new(&model).statements().unwrap();

    assert_eq!(statements.len(), 1 + 3 + 2 + 1);
    assert_eq!(
        statements.last().map(String::as_str),
        Some(r#"CREATE INDEX IF NOT EXISTS "shipments_customer_id_idx" ON "shipments" ("customer_id");"#)
    );
}

#[test]
fn generation_is_repeatable() {
    let model = Shipment::new();
    let sql = TableSql::new(&model);
    assert_eq!(sql.statements().unwrap(), sql.statements().unwrap());
}

#[test]
fn validation_names_table_and_column() {
    let table = Table::new("accounts").field(
        UuidField::new("id")
            .primary_key()
            .nullable(),
    );

    let err = TableSql::new(&table).validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"table "accounts": column "id": primary key cannot be nullable"#
    );
}

#[test]
fn rendering_does_not_validate() {
    let table = Table::new("prices").field(NumericField::new("amount", 5, 2).with_default(123456.78));
    let sql = TableSql::new(&table);

    assert!(sql.validate().is_err());
    assert_eq!(
        sql.create_table_sql(),
        r#"CREATE TABLE IF NOT EXISTS "prices" ("amount" NUMERIC(5, 2) NOT NULL DEFAULT 123456.78);"#
    );
}

#[test]
fn struct_generation_for_custom_model() {
    let model = Shipment::new();
    let code = StructWriter::new().write_struct(&model);

    assert!(code.contains("pub struct Shipments {"));
    assert!(code.contains("    pub weight: f64,\n"));
    assert!(code.contains("    pub origin_id: Option<i32>,\n"));
    assert!(code.contains("    /// Carrier PRO number\n    pub pro_number: String,\n"));
}
