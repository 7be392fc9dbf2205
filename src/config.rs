use std::path::{Path, PathBuf};

/// File read in preference to the primary when present
pub const BACKUP_FILE: &str = "ProjectDetails.tsx.backup";

/// File that receives the spliced result
pub const PRIMARY_FILE: &str = "ProjectDetails.tsx";

/// Number of leading lines kept verbatim (lines 1-761)
pub const PREFIX_LEN: usize = 761;

/// Zero-based index of the first trailing line kept verbatim (line 1124 onwards)
pub const SUFFIX_START: usize = 1123;

/// Block inserted in place of the old inline edit-task modal
pub const REPLACEMENT_BLOCK: &str = r#"            {/* Edit Task Modal - IMPROVED VERSION */}
            <ImprovedTaskModal
                task={selectedTask}
                isOpen={showEditTaskModal}
                onClose={() => setShowEditTaskModal(false)}
                onSave={handleUpdateTask}
                onUpdateStatus={async (taskId, status) => {
                    await tasksService.updateTaskStatus(taskId, status);
                    loadProjectTasks();
                    setShowEditTaskModal(false);
                }}
                onComplete={handleCompleteTaskFromModal}
                workflowConfig={workflowConfig}
                projectDocs={projectDocs}
                onDocumentUpload={async (file, docType) => {
                    if (!project) return;
                    const uploaded = await documentsService.upload(file, project.id, docType, selectedTask?.id);
                    setProjectDocs(prev => [...prev, uploaded]);
                }}
                onDocumentDelete={deleteDoc}
                canTakeTask={selectedTask ? canUserTakeTask(selectedTask) : false}
                hasEditPermission={hasPermission('task:edit') || (selectedTask ? canUserTakeTask(selectedTask) && hasPermission('task:edit_own') : false)}
            />
"#;

/// Everything one splice run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceConfig {
    /// Preferred read source
    pub backup_path: PathBuf,
    /// Fallback read source and write target
    pub primary_path: PathBuf,
    /// Lines kept before the replacement block
    pub prefix_len: usize,
    /// Index of the first line kept after the replacement block
    pub suffix_start: usize,
    /// Literal inserted as a single element
    pub replacement: &'static str,
}

impl SpliceConfig {
    /// Resolve the fixed file names against `workdir`
    pub fn for_workdir(workdir: impl AsRef<Path>) -> Self {
        let workdir = workdir.as_ref();
        Self {
            backup_path: workdir.join(BACKUP_FILE),
            primary_path: workdir.join(PRIMARY_FILE),
            prefix_len: PREFIX_LEN,
            suffix_start: SUFFIX_START,
            replacement: REPLACEMENT_BLOCK,
        }
    }
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self::for_workdir(".")
    }
}
