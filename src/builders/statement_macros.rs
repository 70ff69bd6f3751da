/// Generate the rendering and runner methods shared by every statement builder.
///
/// The builder must have `placeholder_format: PlaceholderFormat` and
/// `runner: Option<Arc<dyn Runner>>` fields and a
/// `fn build_sql(&self) -> Result<(String, Vec<SqlValue>)>` that renders with
/// plain `?` markers.
macro_rules! impl_statement {
    ($builder:ident) => {
        impl $builder {
            /// Select the parameter-marker convention used by `to_sql`.
            pub fn placeholder_format(
                mut self,
                format: $crate::placeholder::PlaceholderFormat,
            ) -> Self {
                self.placeholder_format = format;
                self
            }

            /// Bind the runner that `exec`, `query` and `query_row` delegate to.
            pub fn run_with(
                mut self,
                runner: ::std::sync::Arc<dyn $crate::traits::Runner>,
            ) -> Self {
                self.runner = Some(runner);
                self
            }

            /// Render the statement text and its arguments.
            pub fn to_sql(
                &self,
            ) -> $crate::error::Result<(String, Vec<$crate::types::SqlValue>)> {
                let (sql, args) = self.build_sql()?;
                Ok((self.placeholder_format.replace_placeholders(&sql), args))
            }

            /// Like [`to_sql`](Self::to_sql), but panics if the statement is incomplete.
            pub fn must_sql(&self) -> (String, Vec<$crate::types::SqlValue>) {
                match self.to_sql() {
                    Ok(rendered) => rendered,
                    Err(e) => panic!("{}", e),
                }
            }

            fn bound_runner(&self) -> $crate::error::Result<&dyn $crate::traits::Runner> {
                self.runner
                    .as_deref()
                    .ok_or($crate::error::SqrsError::RunnerNotSet)
            }

            /// Render and run the statement with the bound runner.
            pub async fn exec(&self) -> $crate::error::Result<$crate::types::ExecResult> {
                $crate::run::exec_with(self.bound_runner()?, self).await
            }

            /// Render and run the statement, returning its rows.
            pub async fn query(&self) -> $crate::error::Result<$crate::types::QueryResult> {
                $crate::run::query_with(self.bound_runner()?, self).await
            }

            /// Render and run the statement, expecting exactly one row back.
            pub async fn query_row(&self) -> $crate::error::Result<$crate::types::Row> {
                $crate::run::query_row_with(self.bound_runner()?, self).await
            }
        }

        impl $crate::traits::Sqlizer for $builder {
            fn to_sql(
                &self,
            ) -> $crate::error::Result<(String, Vec<$crate::types::SqlValue>)> {
                $builder::to_sql(self)
            }

            fn to_sql_raw(
                &self,
            ) -> $crate::error::Result<(String, Vec<$crate::types::SqlValue>)> {
                self.build_sql()
            }
        }

        impl From<$builder> for $crate::clauses::Fragment {
            fn from(builder: $builder) -> Self {
                $crate::clauses::Fragment::nested(builder)
            }
        }
    };
}
