mod project_inspection;
